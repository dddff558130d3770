//! CalendarDate value object: ambiguous-format parsing and the
//! effective-year cutoff rule.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FormatError;

// Fixed Gregorian approximation of the lunar new year boundary.
// Births on or before March 13 count toward the previous year.
const LUNAR_CUTOFF_MONTH: i32 = 3;
const LUNAR_CUTOFF_DAY: i32 = 13;

/// A parsed birth date.
///
/// Day and month are taken as given and are not validated against the
/// real calendar; the value 31 only serves to disambiguate the two
/// accepted input orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl CalendarDate {
    /// Parses a date string in `YYYY-MM-DD` or `DD/MM/YYYY` order, with
    /// either `-` or `/` as the separator.
    ///
    /// Disambiguation: when the first numeric part exceeds 31 it must be
    /// the year, so the order is (year, month, day); otherwise the order
    /// is (day, month, year).
    ///
    /// # Errors
    ///
    /// Returns `FormatError` when the input is blank, contains neither
    /// separator, does not split into exactly 3 parts, or any part is
    /// not a number.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let s = text.trim();
        if s.is_empty() {
            return Err(FormatError::EmptyInput);
        }

        let sep = if s.contains('-') {
            '-'
        } else if s.contains('/') {
            '/'
        } else {
            return Err(FormatError::MissingSeparator);
        };

        let raw: Vec<&str> = s.split(sep).collect();
        if raw.len() != 3 {
            return Err(FormatError::wrong_part_count(raw.len()));
        }

        let mut parts = [0i32; 3];
        for (i, piece) in raw.iter().enumerate() {
            parts[i] = piece
                .trim()
                .parse()
                .map_err(|_| FormatError::non_numeric(piece.trim()))?;
        }

        if parts[0] > 31 {
            Ok(CalendarDate {
                year: parts[0],
                month: parts[1],
                day: parts[2],
            })
        } else {
            Ok(CalendarDate {
                year: parts[2],
                month: parts[1],
                day: parts[0],
            })
        }
    }

    /// Returns the effective birth year used for all cycle lookups.
    ///
    /// Dates up to and including March 13 belong to the previous lunar
    /// year under the fixed Gregorian approximation.
    pub fn effective_year(&self) -> i32 {
        if self.month < LUNAR_CUTOFF_MONTH
            || (self.month == LUNAR_CUTOFF_MONTH && self.day <= LUNAR_CUTOFF_DAY)
        {
            self.year - 1
        } else {
            self.year
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
