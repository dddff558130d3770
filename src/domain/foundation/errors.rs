//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised while parsing a birth-date string.
///
/// This is the only error the calculation core can raise. Every other
/// out-of-vocabulary input (unknown direction label, unrecognized site
/// tag, out-of-table month) degrades to an absent result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Birth date is empty")]
    EmptyInput,

    #[error("Birth date must use '-' or '/' as separator (e.g. 1992-03-13 or 13/03/1992)")]
    MissingSeparator,

    #[error("Birth date must have exactly 3 parts, got {found}")]
    WrongPartCount { found: usize },

    #[error("Birth date part '{part}' is not a number")]
    NonNumericPart { part: String },
}

impl FormatError {
    /// Creates a wrong part count error.
    pub fn wrong_part_count(found: usize) -> Self {
        FormatError::WrongPartCount { found }
    }

    /// Creates a non-numeric part error.
    pub fn non_numeric(part: impl Into<String>) -> Self {
        FormatError::NonNumericPart { part: part.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_displays_correctly() {
        assert_eq!(format!("{}", FormatError::EmptyInput), "Birth date is empty");
    }

    #[test]
    fn missing_separator_mentions_both_separators() {
        let msg = format!("{}", FormatError::MissingSeparator);
        assert!(msg.contains("'-'"));
        assert!(msg.contains("'/'"));
    }

    #[test]
    fn wrong_part_count_includes_found_count() {
        let err = FormatError::wrong_part_count(2);
        assert_eq!(
            format!("{}", err),
            "Birth date must have exactly 3 parts, got 2"
        );
    }

    #[test]
    fn non_numeric_part_includes_offending_part() {
        let err = FormatError::non_numeric("abc");
        assert_eq!(format!("{}", err), "Birth date part 'abc' is not a number");
    }
}
