//! The 12 zodiac signs (con giáp), derived from a year by the fixed
//! modulo-12 offset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 12 zodiac signs, in cycle order starting from Tý.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Rat,
    Ox,
    Tiger,
    Cat,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ZodiacSign {
    /// Returns all signs in cycle order.
    pub fn all() -> &'static [ZodiacSign] {
        &[
            ZodiacSign::Rat,
            ZodiacSign::Ox,
            ZodiacSign::Tiger,
            ZodiacSign::Cat,
            ZodiacSign::Dragon,
            ZodiacSign::Snake,
            ZodiacSign::Horse,
            ZodiacSign::Goat,
            ZodiacSign::Monkey,
            ZodiacSign::Rooster,
            ZodiacSign::Dog,
            ZodiacSign::Pig,
        ]
    }

    /// Derives the sign of a calendar year. Year 4 is a Rat year.
    pub fn of_year(year: i32) -> ZodiacSign {
        let idx = ((year - 4) % 12 + 12) % 12;
        Self::all()[idx as usize]
    }

    /// Returns the 0-based index of this sign in the cycle.
    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .expect("ZodiacSign must be in all() array")
    }

    /// Returns the diametrically opposite sign on the 12-cycle.
    pub fn opposite(&self) -> ZodiacSign {
        Self::all()[(self.index() + 6) % 12]
    }

    /// Returns the Vietnamese label.
    pub fn label(&self) -> &'static str {
        match self {
            ZodiacSign::Rat => "Tý",
            ZodiacSign::Ox => "Sửu",
            ZodiacSign::Tiger => "Dần",
            ZodiacSign::Cat => "Mão",
            ZodiacSign::Dragon => "Thìn",
            ZodiacSign::Snake => "Tỵ",
            ZodiacSign::Horse => "Ngọ",
            ZodiacSign::Goat => "Mùi",
            ZodiacSign::Monkey => "Thân",
            ZodiacSign::Rooster => "Dậu",
            ZodiacSign::Dog => "Tuất",
            ZodiacSign::Pig => "Hợi",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_4_is_rat() {
        assert_eq!(ZodiacSign::of_year(4), ZodiacSign::Rat);
    }

    #[test]
    fn known_years_map_correctly() {
        assert_eq!(ZodiacSign::of_year(1991), ZodiacSign::Goat);
        assert_eq!(ZodiacSign::of_year(1996), ZodiacSign::Rat);
        assert_eq!(ZodiacSign::of_year(2024), ZodiacSign::Dragon);
        assert_eq!(ZodiacSign::of_year(2025), ZodiacSign::Snake);
    }

    #[test]
    fn of_year_is_periodic_with_period_12() {
        for year in 1990..2002 {
            assert_eq!(ZodiacSign::of_year(year), ZodiacSign::of_year(year + 12));
        }
    }

    #[test]
    fn of_year_handles_years_before_epoch() {
        assert_eq!(ZodiacSign::of_year(3), ZodiacSign::Pig);
        assert_eq!(ZodiacSign::of_year(-8), ZodiacSign::Rat);
    }

    #[test]
    fn opposite_is_six_steps_away_and_involutive() {
        for sign in ZodiacSign::all() {
            let opp = sign.opposite();
            assert_eq!((sign.index() + 6) % 12, opp.index());
            assert_eq!(opp.opposite(), *sign);
        }
    }

    #[test]
    fn goat_opposes_ox() {
        assert_eq!(ZodiacSign::Goat.opposite(), ZodiacSign::Ox);
    }

    #[test]
    fn labels_are_vietnamese() {
        assert_eq!(ZodiacSign::Rat.label(), "Tý");
        assert_eq!(format!("{}", ZodiacSign::Pig), "Hợi");
    }
}
