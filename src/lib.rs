//! Phong Thủy - Bát Trạch feng shui calculation engine.
//!
//! Computes traditional Vietnamese feng shui indicators from a birth
//! date, gender, house orientation, and planned construction year and
//! month: the owner's life-direction group (cung mệnh), the 8-direction
//! favorability table, the age-based construction taboos (Kim Lâu,
//! Hoang Ốc, Tam Tai, xung tuổi, elemental conflict), and the
//! environmental site-feature checklist.
//!
//! The engine is pure and stateless; the presentation layer calls
//! [`application::EvaluateHandler`] with raw form inputs and renders
//! the structured result bundle.

pub mod application;
pub mod domain;
