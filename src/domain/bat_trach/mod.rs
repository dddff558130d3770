//! Bát Trạch module - The 8-direction favorability system.
//!
//! - `DirectionRating` - the 8 outcome categories with meaning and
//!   advice texts
//! - `tables` - the static per-cung direction tables (8 bijections)
//! - `DirectionAnalyzer` - classification of a chosen facing direction

mod analyzer;
mod rating;
mod tables;

pub use analyzer::{DirectionAnalysis, DirectionAnalyzer, RatedDirection};
pub use rating::DirectionRating;
pub use tables::{rating_for, table_for, DirectionTable};
