//! Timing module - Construction-timing taboo checks.
//!
//! Five independent checks against a candidate construction year and
//! month:
//!
//! - `KimLauCheck` - the age-remainder taboo on the 9-cycle
//! - `HoangOcCheck` - the 6-station house-luck cycle
//! - `TamTaiCheck` - the zodiac-triad three-year window
//! - `ZodiacClashCheck` - diametric zodiac opposition
//! - elemental conflict of the owner's cung with the year and month
//!
//! `ConstructionEvaluation` aggregates them with warning texts.

mod evaluator;
mod hoang_oc;
mod kim_lau;
mod tam_tai;
mod xung_tuoi;

pub use evaluator::{nominal_age, ConstructionEvaluation};
pub use hoang_oc::{HoangOcCheck, HoangOcStation};
pub use kim_lau::{KimLauCheck, KimLauKind};
pub use tam_tai::TamTaiCheck;
pub use xung_tuoi::ZodiacClashCheck;
