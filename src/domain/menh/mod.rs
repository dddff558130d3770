//! Menh module - Life-direction (cung mệnh) calculation.
//!
//! - `Cung` - the 8 life-direction groups with fixed element, compass
//!   direction, and house group
//! - `CungProfile` - the computed bundle for a birth year and gender

mod cung;
mod profile;

pub use cung::{Cung, HouseGroup};
pub use profile::CungProfile;
