//! Xung tuổi check: diametric zodiac opposition between the owner's
//! year and the construction year.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ZodiacSign;

/// Result of the zodiac-opposition check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacClashCheck {
    pub is_clash: bool,
    pub owner_sign: ZodiacSign,
    pub construction_sign: ZodiacSign,
    /// The sign diametrically opposite the owner's.
    pub opposite_sign: ZodiacSign,
}

impl ZodiacClashCheck {
    /// Flags a construction year whose sign sits six steps from the
    /// owner's on the 12-cycle.
    pub fn of_years(owner_year: i32, construction_year: i32) -> ZodiacClashCheck {
        let owner_sign = ZodiacSign::of_year(owner_year);
        let construction_sign = ZodiacSign::of_year(construction_year);
        let opposite_sign = owner_sign.opposite();
        ZodiacClashCheck {
            is_clash: construction_sign == opposite_sign,
            owner_sign,
            construction_sign,
            opposite_sign,
        }
    }
}
