//! Tam Tai check: three-year taboo windows keyed by the owner's zodiac
//! triad.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ZodiacSign;

use crate::domain::foundation::ZodiacSign::{
    Cat, Dog, Dragon, Goat, Horse, Monkey, Ox, Pig, Rat, Rooster, Snake, Tiger,
};

/// The four zodiac triads and their fixed Tam Tai year sets.
const TAM_TAI_GROUPS: [([ZodiacSign; 3], [ZodiacSign; 3]); 4] = [
    ([Monkey, Rat, Dragon], [Tiger, Cat, Dragon]),
    ([Tiger, Horse, Dog], [Monkey, Rooster, Dog]),
    ([Pig, Cat, Goat], [Snake, Horse, Goat]),
    ([Snake, Rooster, Ox], [Pig, Rat, Ox]),
];

/// Result of the Tam Tai check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TamTaiCheck {
    pub is_tam_tai: bool,
    pub owner_sign: ZodiacSign,
    pub construction_sign: ZodiacSign,
    /// The taboo triad for the owner's group. Empty only if the owner's
    /// sign belonged to no group, which the 4×3 grouping rules out.
    pub tam_tai_signs: Vec<ZodiacSign>,
}

impl TamTaiCheck {
    /// Runs the check for an owner year and a construction year (both
    /// effective years).
    pub fn of_years(owner_year: i32, construction_year: i32) -> TamTaiCheck {
        let owner_sign = ZodiacSign::of_year(owner_year);
        let construction_sign = ZodiacSign::of_year(construction_year);

        let taboo = TAM_TAI_GROUPS
            .iter()
            .find(|(group, _)| group.contains(&owner_sign))
            .map(|(_, taboo)| taboo.to_vec())
            .unwrap_or_default();

        TamTaiCheck {
            is_tam_tai: taboo.contains(&construction_sign),
            owner_sign,
            construction_sign,
            tam_tai_signs: taboo,
        }
    }
}
