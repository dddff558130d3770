//! Hoang Ốc check: the 6-station house-luck cycle over nominal age.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six Hoang Ốc stations, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoangOcStation {
    NhatCat,
    NhiNghi,
    TamDiaSat,
    TuTanTai,
    NguThoTu,
    LucHoangOc,
}

impl HoangOcStation {
    /// Returns all stations in cycle order.
    pub fn all() -> &'static [HoangOcStation] {
        &[
            HoangOcStation::NhatCat,
            HoangOcStation::NhiNghi,
            HoangOcStation::TamDiaSat,
            HoangOcStation::TuTanTai,
            HoangOcStation::NguThoTu,
            HoangOcStation::LucHoangOc,
        ]
    }

    /// Returns the Vietnamese label.
    pub fn label(&self) -> &'static str {
        match self {
            HoangOcStation::NhatCat => "Nhất Cát",
            HoangOcStation::NhiNghi => "Nhì Nghi",
            HoangOcStation::TamDiaSat => "Tam Địa Sát",
            HoangOcStation::TuTanTai => "Tứ Tấn Tài",
            HoangOcStation::NguThoTu => "Ngũ Thọ Tử",
            HoangOcStation::LucHoangOc => "Lục Hoang Ốc",
        }
    }

    /// The 3rd, 5th, and 6th stations are the bad ones.
    pub fn is_bad(&self) -> bool {
        matches!(
            self,
            HoangOcStation::TamDiaSat | HoangOcStation::NguThoTu | HoangOcStation::LucHoangOc
        )
    }
}

impl fmt::Display for HoangOcStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of the Hoang Ốc check for a nominal age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoangOcCheck {
    pub station: HoangOcStation,
    pub is_bad: bool,
}

impl HoangOcCheck {
    /// Runs the check: index = 5 when age mod 6 == 0, else
    /// (age mod 6) - 1.
    pub fn of_age(age: i32) -> HoangOcCheck {
        let m = age.rem_euclid(6);
        let idx = if m == 0 { 5 } else { (m - 1) as usize };
        let station = HoangOcStation::all()[idx];
        HoangOcCheck {
            station,
            is_bad: station.is_bad(),
        }
    }
}
