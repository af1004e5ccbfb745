//! Detection of expected résumé sections.
//!
//! A section counts as present when its name occurs anywhere in the text,
//! case-insensitively. Headings are not parsed, so a section name used in
//! prose also counts.

use crate::text;

use super::{CheckId, Finding, FindingDetails, SectionPresence};

/// Presence of each expected section, in declaration order.
pub fn check_sections(resume: &str, sections: &[String]) -> Vec<SectionPresence> {
    let folded = text::fold_case(resume);
    sections
        .iter()
        .map(|name| SectionPresence {
            name: name.clone(),
            present: text::contains_term(&folded, name),
        })
        .collect()
}

pub fn sections_finding(resume: &str, sections: &[String]) -> Finding {
    let found = check_sections(resume, sections);
    let missing: Vec<&str> = found
        .iter()
        .filter(|s| !s.present)
        .map(|s| s.name.as_str())
        .collect();

    let summary = if missing.is_empty() {
        format!("All {} sections present", found.len())
    } else {
        format!("Missing: {}", missing.join(", "))
    };
    let suggestion = format!("Add the missing sections: {}.", missing.join(", "));
    let flagged = !missing.is_empty();

    Finding::new(
        CheckId::Sections,
        summary,
        FindingDetails::Sections { sections: found },
    )
    .flag_if(flagged, suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    fn names(found: &[SectionPresence]) -> Vec<&str> {
        found.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_always_reports_every_section_in_order() {
        let profile = Profile::default();
        for text in ["", "EDUCATION\nSkills", "certifications projects experience"] {
            let found = check_sections(text, &profile.sections);
            assert_eq!(
                names(&found),
                vec!["experience", "education", "skills", "projects", "certifications"]
            );
        }
    }

    #[test]
    fn test_case_insensitive_presence() {
        let profile = Profile::default();
        let found = check_sections("WORK EXPERIENCE\nEducation", &profile.sections);
        let present: Vec<bool> = found.iter().map(|s| s.present).collect();
        assert_eq!(present, vec![true, true, false, false, false]);
    }

    #[test]
    fn test_substring_match_anywhere() {
        let sections = vec!["skills".to_string()];
        assert!(check_sections("Built my skillset; many skillsets", &sections)[0].present);
        assert!(!check_sections("unskilled", &sections)[0].present);
    }

    #[test]
    fn test_finding_lists_missing_sections() {
        let profile = Profile::default();
        let finding = sections_finding("Experience, Education and Skills", &profile.sections);
        assert!(finding.needs_attention);
        assert_eq!(finding.summary, "Missing: projects, certifications");

        let all = sections_finding(
            "experience education skills projects certifications",
            &profile.sections,
        );
        assert!(!all.needs_attention);
        assert!(all.suggestion.is_none());
    }
}
