//! Construction-timing evaluation: five independent checks over a
//! candidate construction year and month, aggregated with warning
//! texts.

use serde::{Deserialize, Serialize};

use super::{HoangOcCheck, KimLauCheck, TamTaiCheck, ZodiacClashCheck};
use crate::domain::foundation::Element;
use crate::domain::menh::CungProfile;

/// Returns the traditional nominal age ("tuổi mụ") at a target year.
pub fn nominal_age(effective_birth_year: i32, target_year: i32) -> i32 {
    target_year - effective_birth_year + 1
}

/// The full timing evaluation for one construction year/month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionEvaluation {
    pub profile: CungProfile,
    pub construction_year: i32,
    pub construction_month: i32,
    /// Tuổi mụ at the construction year.
    pub age: i32,
    pub kim_lau: KimLauCheck,
    pub hoang_oc: HoangOcCheck,
    pub tam_tai: TamTaiCheck,
    pub zodiac_clash: ZodiacClashCheck,
    pub year_element: Element,
    /// Absent for months outside the 12-entry table; no month conflict
    /// is reported then.
    pub month_element: Option<Element>,
    pub year_conflict: bool,
    pub month_conflict: bool,
    pub year_warnings: Vec<String>,
    pub month_warnings: Vec<String>,
    pub is_year_good: bool,
    pub is_month_good: bool,
}

impl ConstructionEvaluation {
    /// Evaluates a candidate construction year and month against the
    /// owner's profile. The five checks are independent; each flagged
    /// one contributes a warning line.
    pub fn evaluate(
        profile: CungProfile,
        construction_year: i32,
        construction_month: i32,
    ) -> ConstructionEvaluation {
        let age = nominal_age(profile.effective_year, construction_year);

        let kim_lau = KimLauCheck::of_age(age);
        let hoang_oc = HoangOcCheck::of_age(age);
        let tam_tai = TamTaiCheck::of_years(profile.effective_year, construction_year);
        let zodiac_clash = ZodiacClashCheck::of_years(profile.effective_year, construction_year);

        let year_element = Element::of_year(construction_year);
        let month_element = Element::of_month(construction_month);
        let year_conflict = profile.element.conflicts_with(year_element);
        let month_conflict = month_element
            .map(|e| profile.element.conflicts_with(e))
            .unwrap_or(false);

        let mut year_warnings = Vec::new();
        if let Some(kind) = kim_lau.kind {
            year_warnings.push(format!("Phạm Kim Lâu ({}) — tuổi mụ {}.", kind.label(), age));
        }
        if hoang_oc.is_bad {
            year_warnings.push(format!("Phạm Hoang Ốc ({}).", hoang_oc.station.label()));
        }
        if tam_tai.is_tam_tai {
            let cycle: Vec<&str> = tam_tai.tam_tai_signs.iter().map(|s| s.label()).collect();
            year_warnings.push(format!(
                "Phạm Tam Tai ({}); chu kỳ Tam Tai: {}.",
                tam_tai.construction_sign.label(),
                cycle.join(", ")
            ));
        }
        if zodiac_clash.is_clash {
            year_warnings.push(format!(
                "Xung tuổi với năm {} (năm {} đối xung {}).",
                construction_year,
                zodiac_clash.construction_sign.label(),
                zodiac_clash.opposite_sign.label()
            ));
        }
        if year_conflict {
            year_warnings.push(format!(
                "Ngũ hành Cung ({}) khắc Ngũ hành Năm ({}).",
                profile.element.label(),
                year_element.label()
            ));
        }

        let mut month_warnings = Vec::new();
        if month_conflict {
            // month_conflict implies the element was present.
            let month_label = month_element.map(|e| e.label()).unwrap_or_default();
            month_warnings.push(format!(
                "Tháng {}: Cung ({}) khắc tháng ({}).",
                construction_month,
                profile.element.label(),
                month_label
            ));
        }

        let is_year_good = year_warnings.is_empty();
        let is_month_good = month_warnings.is_empty();

        ConstructionEvaluation {
            profile,
            construction_year,
            construction_month,
            age,
            kim_lau,
            hoang_oc,
            tam_tai,
            zodiac_clash,
            year_element,
            month_element,
            year_conflict,
            month_conflict,
            year_warnings,
            month_warnings,
            is_year_good,
            is_month_good,
        }
    }
}
