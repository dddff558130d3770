//! Kim Lâu check: the age-remainder taboo on the 9-cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four Kim Lâu kinds, one per flagged remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KimLauKind {
    /// Remainder 1 — harm to the owner.
    Than,
    /// Remainder 3 — harm to the spouse.
    The,
    /// Remainder 6 — harm to the children.
    Tu,
    /// Remainder 8 — harm to livestock and assets.
    LucSuc,
}

impl KimLauKind {
    /// Returns the Vietnamese label.
    pub fn label(&self) -> &'static str {
        match self {
            KimLauKind::Than => "Kim Lâu Thân",
            KimLauKind::The => "Kim Lâu Thê",
            KimLauKind::Tu => "Kim Lâu Tử",
            KimLauKind::LucSuc => "Kim Lâu Lục Súc",
        }
    }
}

impl fmt::Display for KimLauKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of the Kim Lâu check for a nominal age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KimLauCheck {
    pub is_kim_lau: bool,
    pub kind: Option<KimLauKind>,
    /// Age mod 9, with 0 mapped to 9.
    pub remainder: i32,
}

impl KimLauCheck {
    /// Runs the check: remainder = age mod 9 (0 counts as 9); flagged
    /// for remainders 1, 3, 6, and 8.
    pub fn of_age(age: i32) -> KimLauCheck {
        let mut r = age.rem_euclid(9);
        if r == 0 {
            r = 9;
        }
        let kind = match r {
            1 => Some(KimLauKind::Than),
            3 => Some(KimLauKind::The),
            6 => Some(KimLauKind::Tu),
            8 => Some(KimLauKind::LucSuc),
            _ => None,
        };
        KimLauCheck {
            is_kim_lau: kind.is_some(),
            kind,
            remainder: r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_zero_counts_as_nine() {
        let check = KimLauCheck::of_age(27);
        assert_eq!(check.remainder, 9);
        assert!(!check.is_kim_lau);
    }

    #[test]
    fn flagged_remainders_map_to_their_kinds() {
        assert_eq!(KimLauCheck::of_age(28).kind, Some(KimLauKind::Than));
        assert_eq!(KimLauCheck::of_age(30).kind, Some(KimLauKind::The));
        assert_eq!(KimLauCheck::of_age(33).kind, Some(KimLauKind::Tu));
        assert_eq!(KimLauCheck::of_age(35).kind, Some(KimLauKind::LucSuc));
    }

    #[test]
    fn age_35_is_kim_lau_luc_suc() {
        // 35 mod 9 = 8.
        let check = KimLauCheck::of_age(35);
        assert!(check.is_kim_lau);
        assert_eq!(check.kind, Some(KimLauKind::LucSuc));
        assert_eq!(check.remainder, 8);
    }

    #[test]
    fn safe_remainders_are_not_flagged() {
        for age in [2, 4, 5, 7, 9] {
            let check = KimLauCheck::of_age(age);
            assert!(!check.is_kim_lau, "age {age} should be safe");
            assert_eq!(check.kind, None);
        }
    }

    #[test]
    fn kind_labels_are_vietnamese() {
        assert_eq!(KimLauKind::LucSuc.label(), "Kim Lâu Lục Súc");
        assert_eq!(format!("{}", KimLauKind::Than), "Kim Lâu Thân");
    }
}
