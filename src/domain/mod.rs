//! Domain layer containing the calculation engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (dates, gender, elements,
//!   directions, zodiac signs, errors)
//! - `menh` - Life-direction (cung mệnh) calculation
//! - `bat_trach` - The 8-direction favorability system
//! - `timing` - Construction-timing taboo checks
//! - `site` - Environmental site-feature checklist
//!
//! # Design Philosophy
//!
//! Everything here is pure and stateless: fixed-size table lookups and
//! modulo arithmetic over immutable static tables. Each call computes a
//! fresh result; there is no I/O and no shared mutable state.

pub mod bat_trach;
pub mod foundation;
pub mod menh;
pub mod site;
pub mod timing;
