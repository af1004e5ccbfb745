//! Soft-skill and action-verb detection.

use crate::text;

use super::{CheckId, Finding, FindingDetails};

/// Terms from each list found in the résumé, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactLanguage {
    pub soft_skills: Vec<String>,
    pub action_verbs: Vec<String>,
}

/// Case-insensitive substring search for every configured term.
pub fn find_impact_language(
    resume: &str,
    soft_skills: &[String],
    action_verbs: &[String],
) -> ImpactLanguage {
    let folded = text::fold_case(resume);
    let owned = |terms: Vec<&str>| terms.into_iter().map(String::from).collect();
    ImpactLanguage {
        soft_skills: owned(text::terms_present(&folded, soft_skills)),
        action_verbs: owned(text::terms_present(&folded, action_verbs)),
    }
}

pub fn impact_finding(resume: &str, soft_skills: &[String], action_verbs: &[String]) -> Finding {
    let found = find_impact_language(resume, soft_skills, action_verbs);
    let list = |terms: &[String]| {
        if terms.is_empty() {
            "none found".to_string()
        } else {
            terms.join(", ")
        }
    };
    let summary = format!(
        "Soft skills: {}; action verbs: {}",
        list(&found.soft_skills),
        list(&found.action_verbs)
    );
    let flagged = found.soft_skills.is_empty() || found.action_verbs.is_empty();

    Finding::new(
        CheckId::ImpactLanguage,
        summary,
        FindingDetails::ImpactLanguage {
            soft_skills: found.soft_skills,
            action_verbs: found.action_verbs,
        },
    )
    .flag_if(flagged, "Add soft skills and action verbs to show impact.")
}
