//! The 8 life-direction groups (cung mệnh) and their fixed attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CompassDirection, Element};

/// One of the 8 life-direction groups, named by trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cung {
    /// Càn
    Qian,
    /// Khôn
    Kun,
    /// Cấn
    Gen,
    /// Chấn
    Zhen,
    /// Tốn
    Xun,
    /// Ly
    Li,
    /// Khảm
    Kan,
    /// Đoài
    Dui,
}

/// The two house groups of the Bát Trạch system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseGroup {
    East,
    West,
}

impl HouseGroup {
    /// Returns the Vietnamese label.
    pub fn label(&self) -> &'static str {
        match self {
            HouseGroup::East => "Đông Tứ Trạch",
            HouseGroup::West => "Tây Tứ Trạch",
        }
    }
}

impl fmt::Display for HouseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Cung {
    /// Returns all 8 groups.
    pub fn all() -> &'static [Cung] {
        &[
            Cung::Qian,
            Cung::Kun,
            Cung::Gen,
            Cung::Zhen,
            Cung::Xun,
            Cung::Li,
            Cung::Kan,
            Cung::Dui,
        ]
    }

    /// Returns the Vietnamese name.
    pub fn label(&self) -> &'static str {
        match self {
            Cung::Qian => "Càn",
            Cung::Kun => "Khôn",
            Cung::Gen => "Cấn",
            Cung::Zhen => "Chấn",
            Cung::Xun => "Tốn",
            Cung::Li => "Ly",
            Cung::Kan => "Khảm",
            Cung::Dui => "Đoài",
        }
    }

    /// Returns the group's fixed element.
    pub fn element(&self) -> Element {
        match self {
            Cung::Qian | Cung::Dui => Element::Metal,
            Cung::Kun | Cung::Gen => Element::Earth,
            Cung::Zhen | Cung::Xun => Element::Wood,
            Cung::Li => Element::Fire,
            Cung::Kan => Element::Water,
        }
    }

    /// Returns the group's fixed compass direction.
    pub fn direction(&self) -> CompassDirection {
        match self {
            Cung::Qian => CompassDirection::NorthWest,
            Cung::Kun => CompassDirection::SouthWest,
            Cung::Gen => CompassDirection::NorthEast,
            Cung::Zhen => CompassDirection::East,
            Cung::Xun => CompassDirection::SouthEast,
            Cung::Li => CompassDirection::South,
            Cung::Kan => CompassDirection::North,
            Cung::Dui => CompassDirection::West,
        }
    }

    /// Returns the house group. Khảm, Ly, Chấn, and Tốn form the East
    /// group; the other four form the West group.
    pub fn house_group(&self) -> HouseGroup {
        match self {
            Cung::Kan | Cung::Li | Cung::Zhen | Cung::Xun => HouseGroup::East,
            Cung::Qian | Cung::Kun | Cung::Gen | Cung::Dui => HouseGroup::West,
        }
    }
}

impl fmt::Display for Cung {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_match_bat_trach_reference() {
        assert_eq!(Cung::Qian.element(), Element::Metal);
        assert_eq!(Cung::Qian.direction(), CompassDirection::NorthWest);
        assert_eq!(Cung::Kun.element(), Element::Earth);
        assert_eq!(Cung::Kun.direction(), CompassDirection::SouthWest);
        assert_eq!(Cung::Gen.element(), Element::Earth);
        assert_eq!(Cung::Gen.direction(), CompassDirection::NorthEast);
        assert_eq!(Cung::Zhen.element(), Element::Wood);
        assert_eq!(Cung::Zhen.direction(), CompassDirection::East);
        assert_eq!(Cung::Xun.element(), Element::Wood);
        assert_eq!(Cung::Xun.direction(), CompassDirection::SouthEast);
        assert_eq!(Cung::Li.element(), Element::Fire);
        assert_eq!(Cung::Li.direction(), CompassDirection::South);
        assert_eq!(Cung::Kan.element(), Element::Water);
        assert_eq!(Cung::Kan.direction(), CompassDirection::North);
        assert_eq!(Cung::Dui.element(), Element::Metal);
        assert_eq!(Cung::Dui.direction(), CompassDirection::West);
    }

    #[test]
    fn east_group_has_exactly_four_members() {
        let east: Vec<_> = Cung::all()
            .iter()
            .filter(|c| c.house_group() == HouseGroup::East)
            .collect();
        assert_eq!(east.len(), 4);
        assert!(east.contains(&&Cung::Kan));
        assert!(east.contains(&&Cung::Li));
        assert!(east.contains(&&Cung::Zhen));
        assert!(east.contains(&&Cung::Xun));
    }

    #[test]
    fn each_cung_direction_is_unique() {
        for (i, a) in Cung::all().iter().enumerate() {
            for b in &Cung::all()[i + 1..] {
                assert_ne!(a.direction(), b.direction());
            }
        }
    }

    #[test]
    fn labels_are_vietnamese() {
        assert_eq!(Cung::Kun.label(), "Khôn");
        assert_eq!(format!("{}", Cung::Dui), "Đoài");
        assert_eq!(HouseGroup::East.label(), "Đông Tứ Trạch");
    }
}
