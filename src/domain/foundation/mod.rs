//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the feng shui domain: dates, gender, elements, compass directions,
//! and zodiac signs.

mod calendar_date;
mod direction;
mod element;
mod errors;
mod gender;
mod zodiac;

pub use calendar_date::CalendarDate;
pub use direction::CompassDirection;
pub use element::Element;
pub use errors::FormatError;
pub use gender::Gender;
pub use zodiac::ZodiacSign;
