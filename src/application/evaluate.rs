//! EvaluateAll - orchestrates the full feng shui evaluation for one
//! request from the presentation layer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::bat_trach::{DirectionAnalysis, DirectionAnalyzer};
use crate::domain::foundation::{CalendarDate, CompassDirection, FormatError, Gender};
use crate::domain::menh::CungProfile;
use crate::domain::site::{SiteIssueChecker, SiteReport};
use crate::domain::timing::ConstructionEvaluation;

/// Raw inputs as the presentation layer collects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Birth date string, `YYYY-MM-DD` or `DD/MM/YYYY`.
    pub birth_date: String,
    /// Gender form token; `"nam"` means male, anything else female.
    pub gender: String,
    /// Vietnamese label of the chosen house-facing direction.
    pub house_direction: String,
    pub construction_year: i32,
    pub construction_month: i32,
    /// Raw feature tags; unrecognized ones are ignored.
    pub site_features: Vec<String>,
}

/// The complete result bundle, returned untouched for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub build: ConstructionEvaluation,
    pub direction: DirectionAnalysis,
    pub site: SiteReport,
}

/// Handler sequencing the domain calls for one evaluation.
pub struct EvaluateHandler;

impl EvaluateHandler {
    /// Runs the full evaluation.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` when the birth-date string is malformed;
    /// this is the only failure path. Unknown direction labels and
    /// feature tags degrade to absent results instead.
    pub fn handle(request: &EvaluationRequest) -> Result<Evaluation, FormatError> {
        let birth_date = CalendarDate::parse(&request.birth_date)?;
        let effective_year = birth_date.effective_year();
        let gender = Gender::from_token(&request.gender);

        let profile = CungProfile::compute(effective_year, gender);
        debug!(
            %birth_date,
            effective_year,
            cung = profile.cung.label(),
            "computed cung profile"
        );

        let build = ConstructionEvaluation::evaluate(
            profile,
            request.construction_year,
            request.construction_month,
        );

        let chosen = CompassDirection::from_label(&request.house_direction);
        let direction = DirectionAnalyzer::analyze(profile.cung, chosen);

        let site = SiteIssueChecker::check(request.site_features.iter().map(String::as_str));

        debug!(
            year_warnings = build.year_warnings.len(),
            month_warnings = build.month_warnings.len(),
            site_problems = site.problems.len(),
            "evaluation complete"
        );

        Ok(Evaluation {
            build,
            direction,
            site,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menh::Cung;

    fn request() -> EvaluationRequest {
        EvaluationRequest {
            birth_date: "1992-03-13".to_string(),
            gender: "nam".to_string(),
            house_direction: "Nam".to_string(),
            construction_year: 2025,
            construction_month: 4,
            site_features: vec!["benh-vien".to_string()],
        }
    }

    #[test]
    fn handle_sequences_all_three_bundles() {
        let evaluation = EvaluateHandler::handle(&request()).unwrap();
        assert_eq!(evaluation.build.profile.effective_year, 1991);
        assert_eq!(evaluation.build.profile.cung, Cung::Li);
        assert!(evaluation.direction.selected.is_some());
        assert_eq!(evaluation.site.problems.len(), 1);
    }

    #[test]
    fn malformed_birth_date_propagates_format_error() {
        let mut bad = request();
        bad.birth_date = "19920313".to_string();
        assert_eq!(
            EvaluateHandler::handle(&bad),
            Err(FormatError::MissingSeparator)
        );
    }

    #[test]
    fn unknown_direction_label_degrades_to_no_selection() {
        let mut req = request();
        req.house_direction = "Up".to_string();
        let evaluation = EvaluateHandler::handle(&req).unwrap();
        assert!(evaluation.direction.selected.is_none());
        assert_eq!(evaluation.direction.all.len(), 8);
    }

    #[test]
    fn handle_is_idempotent() {
        let a = EvaluateHandler::handle(&request()).unwrap();
        let b = EvaluateHandler::handle(&request()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn result_bundle_serializes_to_json() {
        let evaluation = EvaluateHandler::handle(&request()).unwrap();
        let json = serde_json::to_string(&evaluation).unwrap();
        let back: Evaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(evaluation, back);
    }
}
