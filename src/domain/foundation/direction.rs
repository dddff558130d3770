//! The 8 compass directions with their Vietnamese labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 8 compass directions used by the Bát Trạch system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    /// Returns all directions in canonical (clockwise from north) order.
    pub fn all() -> &'static [CompassDirection] {
        &[
            CompassDirection::North,
            CompassDirection::NorthEast,
            CompassDirection::East,
            CompassDirection::SouthEast,
            CompassDirection::South,
            CompassDirection::SouthWest,
            CompassDirection::West,
            CompassDirection::NorthWest,
        ]
    }

    /// Returns the Vietnamese label.
    pub fn label(&self) -> &'static str {
        match self {
            CompassDirection::North => "Bắc",
            CompassDirection::NorthEast => "Đông Bắc",
            CompassDirection::East => "Đông",
            CompassDirection::SouthEast => "Đông Nam",
            CompassDirection::South => "Nam",
            CompassDirection::SouthWest => "Tây Nam",
            CompassDirection::West => "Tây",
            CompassDirection::NorthWest => "Tây Bắc",
        }
    }

    /// Resolves a canonical Vietnamese label back to a direction.
    /// Labels outside the 8-entry vocabulary yield `None`; there is no
    /// fuzzy matching.
    pub fn from_label(label: &str) -> Option<CompassDirection> {
        Self::all().iter().copied().find(|d| d.label() == label)
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
