//! Site module - Environmental feature checklist.
//!
//! - `SiteFeature` - recognized features with tag vocabulary and fixed
//!   problem/remedy texts
//! - `SiteIssueChecker` - the pure tag-set to report lookup

mod checker;
mod feature;

pub use checker::{SiteIssueChecker, SiteReport};
pub use feature::SiteFeature;
