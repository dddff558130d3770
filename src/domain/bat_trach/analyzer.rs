//! House-direction analyzer: classifies a chosen facing direction
//! against the owner's cung and partitions all 8 directions by
//! favorability.

use serde::{Deserialize, Serialize};

use super::{rating_for, table_for, DirectionRating};
use crate::domain::foundation::CompassDirection;
use crate::domain::menh::Cung;

/// One direction of a cung's table together with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedDirection {
    pub direction: CompassDirection,
    pub rating: DirectionRating,
}

/// The analysis result for a chosen house-facing direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionAnalysis {
    /// The entry at the chosen direction; `None` when the caller's
    /// label was not one of the 8 canonical directions.
    pub selected: Option<RatedDirection>,
    /// The 4 favorable entries, in table insertion order.
    pub favorable: Vec<RatedDirection>,
    /// The 4 unfavorable entries, in table insertion order.
    pub unfavorable: Vec<RatedDirection>,
    /// All 8 entries, in table insertion order.
    pub all: Vec<RatedDirection>,
}

/// Bát Trạch direction analysis functions.
pub struct DirectionAnalyzer;

impl DirectionAnalyzer {
    /// Analyzes a chosen direction for a cung.
    ///
    /// `chosen` is `None` when the caller could not resolve its raw
    /// direction label; the partitions are still returned in full.
    pub fn analyze(cung: Cung, chosen: Option<CompassDirection>) -> DirectionAnalysis {
        let all: Vec<RatedDirection> = table_for(cung)
            .iter()
            .map(|(direction, rating)| RatedDirection {
                direction: *direction,
                rating: *rating,
            })
            .collect();

        let selected = chosen.map(|direction| RatedDirection {
            direction,
            rating: rating_for(cung, direction),
        });

        let favorable = all.iter().copied().filter(|e| e.rating.is_favorable()).collect();
        let unfavorable = all
            .iter()
            .copied()
            .filter(|e| !e.rating.is_favorable())
            .collect();

        DirectionAnalysis {
            selected,
            favorable,
            unfavorable,
            all,
        }
    }
}

impl DirectionAnalysis {
    /// The favorable entries re-sorted by the fixed ranking (Sinh Khí
    /// first). A presentation convenience; the stored lists keep table
    /// order.
    pub fn favorable_by_priority(&self) -> Vec<RatedDirection> {
        let mut sorted = self.favorable.clone();
        sorted.sort_by_key(|e| e.rating.priority());
        sorted
    }
}
