//! Gender value object with the form-token mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of the house owner; selects the 9-year cycle to index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Maps a raw form token to a gender. `"nam"` means male; every
    /// other token falls back to female, matching the behavior of the
    /// form this engine was built for.
    pub fn from_token(token: &str) -> Self {
        if token == "nam" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Returns the Vietnamese label.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "nam",
            Gender::Female => "nữ",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
