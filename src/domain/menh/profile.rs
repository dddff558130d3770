//! Cung mệnh computation from effective birth year and gender, using
//! the per-gender 9-year reference cycles.

use serde::{Deserialize, Serialize};

use super::{Cung, HouseGroup};
use crate::domain::foundation::{CompassDirection, Element, Gender};

/// First year of the male reference cycle.
const MALE_START: i32 = 1921;
/// First year of the female reference cycle.
const FEMALE_START: i32 = 1922;

/// Male 9-year cung sequence starting at 1921, with the parallel "số"
/// column from the reference table.
const MALE_CUNG_CYCLE: [Cung; 9] = [
    Cung::Dui,
    Cung::Qian,
    Cung::Kun,
    Cung::Xun,
    Cung::Zhen,
    Cung::Kun,
    Cung::Kan,
    Cung::Li,
    Cung::Gen,
];
const MALE_NUMBER_CYCLE: [u8; 9] = [7, 6, 5, 4, 3, 2, 1, 9, 8];

/// Female 9-year cung sequence starting at 1922, with its "số" column.
const FEMALE_CUNG_CYCLE: [Cung; 9] = [
    Cung::Gen,
    Cung::Kan,
    Cung::Li,
    Cung::Xun,
    Cung::Zhen,
    Cung::Kun,
    Cung::Qian,
    Cung::Dui,
    Cung::Gen,
];
const FEMALE_NUMBER_CYCLE: [u8; 9] = [2, 1, 9, 8, 7, 6, 5, 4, 3];

fn mod9(n: i32) -> usize {
    ((n % 9 + 9) % 9) as usize
}

/// A person's computed life-direction profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CungProfile {
    /// The effective birth year the profile was derived from.
    pub effective_year: i32,
    /// The auxiliary "số" attribute from the reference table.
    pub number: u8,
    pub cung: Cung,
    pub house_group: HouseGroup,
    pub element: Element,
    pub direction: CompassDirection,
}

impl CungProfile {
    /// Computes the profile for an effective birth year and gender.
    ///
    /// Each gender has its own cycle start year and 9-entry sequence;
    /// the index is taken modulo 9 and is non-negative for any year.
    pub fn compute(effective_year: i32, gender: Gender) -> CungProfile {
        let (cung, number) = match gender {
            Gender::Male => {
                let idx = mod9(effective_year - MALE_START);
                (MALE_CUNG_CYCLE[idx], MALE_NUMBER_CYCLE[idx])
            }
            Gender::Female => {
                let idx = mod9(effective_year - FEMALE_START);
                (FEMALE_CUNG_CYCLE[idx], FEMALE_NUMBER_CYCLE[idx])
            }
        };

        CungProfile {
            effective_year,
            number,
            cung,
            house_group: cung.house_group(),
            element: cung.element(),
            direction: cung.direction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn male_1991_is_li_number_9() {
        // (1991 - 1921) mod 9 = 70 mod 9 = 7, the Ly entry.
        let profile = CungProfile::compute(1991, Gender::Male);
        assert_eq!(profile.cung, Cung::Li);
        assert_eq!(profile.number, 9);
        assert_eq!(profile.house_group, HouseGroup::East);
    }

    #[test]
    fn cycle_start_years_map_to_first_entries() {
        let male = CungProfile::compute(1921, Gender::Male);
        assert_eq!(male.cung, Cung::Dui);
        assert_eq!(male.number, 7);

        let female = CungProfile::compute(1922, Gender::Female);
        assert_eq!(female.cung, Cung::Gen);
        assert_eq!(female.number, 2);
    }

    #[test]
    fn derived_attributes_come_from_the_cung() {
        let profile = CungProfile::compute(1926, Gender::Male);
        assert_eq!(profile.cung, Cung::Kun);
        assert_eq!(profile.house_group, HouseGroup::West);
        assert_eq!(profile.element, Element::Earth);
        assert_eq!(profile.direction, CompassDirection::SouthWest);
    }

    #[test]
    fn years_before_cycle_start_still_index_correctly() {
        // 1920 is one step before the male start year.
        let profile = CungProfile::compute(1920, Gender::Male);
        assert_eq!(profile.cung, Cung::Gen);
        assert_eq!(profile.number, 8);
    }

    #[test]
    fn serde_round_trip() {
        let profile = CungProfile::compute(1991, Gender::Female);
        let json = serde_json::to_string(&profile).unwrap();
        let back: CungProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }

    proptest! {
        #[test]
        fn compute_is_periodic_with_period_9(year in 1800i32..2200, male in any::<bool>()) {
            let gender = if male { Gender::Male } else { Gender::Female };
            let a = CungProfile::compute(year, gender);
            let b = CungProfile::compute(year + 9, gender);
            prop_assert_eq!(a.cung, b.cung);
            prop_assert_eq!(a.number, b.number);
            prop_assert_eq!(a.house_group, b.house_group);
        }

        #[test]
        fn compute_is_deterministic(year in 1800i32..2200, male in any::<bool>()) {
            let gender = if male { Gender::Male } else { Gender::Female };
            prop_assert_eq!(
                CungProfile::compute(year, gender),
                CungProfile::compute(year, gender)
            );
        }
    }
}
