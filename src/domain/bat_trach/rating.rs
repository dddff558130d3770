//! The 8 Bát Trạch outcome categories with their fixed meaning and
//! placement-advice texts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 8 direction outcomes: 4 favorable, 4 unfavorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionRating {
    SinhKhi,
    ThienY,
    DienNien,
    PhucVi,
    TuyetMenh,
    NguQuy,
    LucSat,
    HoaHai,
}

impl DirectionRating {
    /// Returns the Vietnamese name.
    pub fn label(&self) -> &'static str {
        match self {
            DirectionRating::SinhKhi => "Sinh Khí",
            DirectionRating::ThienY => "Thiên Y",
            DirectionRating::DienNien => "Diên Niên",
            DirectionRating::PhucVi => "Phục Vị",
            DirectionRating::TuyetMenh => "Tuyệt Mệnh",
            DirectionRating::NguQuy => "Ngũ Quỷ",
            DirectionRating::LucSat => "Lục Sát",
            DirectionRating::HoaHai => "Họa Hại",
        }
    }

    /// Returns the fixed meaning text.
    pub fn meaning(&self) -> &'static str {
        match self {
            DirectionRating::SinhKhi => "Tài lộc, danh tiếng, thăng tiến, vượng khí.",
            DirectionRating::ThienY => "Sức khỏe, trường thọ, quý nhân.",
            DirectionRating::DienNien => "Hòa thuận, bền vững quan hệ.",
            DirectionRating::PhucVi => "Ổn định, thi cử, phát triển bản thân.",
            DirectionRating::TuyetMenh => "Nặng nhất: tổn hại lớn, bệnh tật, phá sản.",
            DirectionRating::NguQuy => "Thị phi, mất mát, tranh cãi.",
            DirectionRating::LucSat => "Kiện tụng, tai nạn, bất hòa.",
            DirectionRating::HoaHai => "Xui xẻo, thất bại nhỏ lẻ.",
        }
    }

    /// Returns true for the 4 favorable outcomes.
    pub fn is_favorable(&self) -> bool {
        matches!(
            self,
            DirectionRating::SinhKhi
                | DirectionRating::ThienY
                | DirectionRating::DienNien
                | DirectionRating::PhucVi
        )
    }

    /// Ranking of the favorable outcomes, best first: Sinh Khí, Thiên
    /// Y, Diên Niên, Phục Vị. Unfavorable outcomes sort after all
    /// favorable ones.
    pub fn priority(&self) -> u8 {
        match self {
            DirectionRating::SinhKhi => 1,
            DirectionRating::ThienY => 2,
            DirectionRating::DienNien => 3,
            DirectionRating::PhucVi => 4,
            _ => 9,
        }
    }

    /// Fixed placement advice for a house facing a direction with this
    /// outcome class.
    pub fn advice(&self) -> &'static [&'static str] {
        if self.is_favorable() {
            &[
                "Ưu tiên cửa chính/ban công theo hướng này.",
                "Bếp, bàn thờ, giường, bàn làm việc xoay về 1 trong 4 hướng tốt.",
                "Giữ lối vào thông thoáng, sạch sẽ.",
            ]
        } else {
            &[
                "Dùng bình phong/hiên/bậc tam cấp để “bẻ dòng khí xấu”.",
                "Bố trí nội thất “tọa hung – hướng cát”.",
                "Treo Bát Quái lồi ngoài cổng (cân nhắc).",
                "Tăng cây xanh, ánh sáng, nước/đá trang trí để điều hòa khí.",
            ]
        }
    }
}

impl fmt::Display for DirectionRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
