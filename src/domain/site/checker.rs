//! Site-issue checker: maps a set of raw feature tags to the fixed
//! problem and remediation texts.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::SiteFeature;

/// Problem and remediation lists for the recognized features present in
/// the input, in fixed check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteReport {
    pub problems: Vec<String>,
    pub solutions: Vec<String>,
}

impl SiteReport {
    /// True when no recognized feature was present.
    pub fn is_clear(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Site environment checking functions.
pub struct SiteIssueChecker;

impl SiteIssueChecker {
    /// Checks a set of raw form tags. Unrecognized tags are silently
    /// ignored; synonym tags count once. Output follows the fixed
    /// check order regardless of input order.
    pub fn check<'a, I>(tags: I) -> SiteReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: HashSet<SiteFeature> =
            tags.into_iter().filter_map(SiteFeature::from_tag).collect();

        let mut report = SiteReport::default();
        for feature in SiteFeature::all() {
            if present.contains(feature) {
                report.problems.push(feature.problem().to_string());
                report.solutions.push(feature.solution().to_string());
            }
        }
        report
    }
}
