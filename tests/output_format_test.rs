//! Tests for the JSON output format.
//!
//! These tests pin the field names and shapes that scripts consuming
//! `resumecheck analyze --format json` rely on.

use std::path::PathBuf;

use resumecheck::report::{render_json, ResumeReport};
use resumecheck::{Analyzer, PlainTextExtractor, DocumentExtractor, Profile};
use serde_json::Value;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Analyze both testdata résumés and return the parsed JSON document.
fn run_and_get_json() -> Value {
    resumecheck::init();

    let testdata = testdata_path();
    let profile_path = testdata.join("profile_offline.yaml");
    let profile = Profile::parse_file(&profile_path).expect("should parse profile");
    let analyzer = Analyzer::new(profile).expect("should build analyzer");

    let extractor = PlainTextExtractor::new();
    let job_path = testdata.join("job_backend.txt");
    let job = extractor.extract(&job_path).expect("should read job");

    let sources = ["resume_strong.txt", "resume_short.md"];
    let results: Vec<ResumeReport> = sources
        .iter()
        .map(|name| {
            let path = testdata.join(name);
            let text = extractor.extract(&path).expect("should read resume");
            ResumeReport {
                source: name.to_string(),
                report: analyzer.analyze(&text, &job).expect("analysis should succeed"),
            }
        })
        .collect();

    let json = render_json(
        &job_path.to_string_lossy(),
        &profile_path.to_string_lossy(),
        &results,
    )
    .expect("should render json");
    serde_json::from_str(&json).expect("output should be valid JSON")
}

#[test]
fn test_json_top_level_fields() {
    let json = run_and_get_json();

    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["job"].as_str().unwrap().ends_with("job_backend.txt"));
    assert!(json["profile"]
        .as_str()
        .unwrap()
        .ends_with("profile_offline.yaml"));
    assert_eq!(json["improvements_suggested"], true);
    assert_eq!(json["resumes"].as_array().unwrap().len(), 2);
}

#[test]
fn test_json_resume_entries() {
    let json = run_and_get_json();
    let resumes = json["resumes"].as_array().unwrap();

    let strong = &resumes[0];
    assert_eq!(strong["source"], "resume_strong.txt");
    assert_eq!(strong["overall_verdict"], false);

    let short = &resumes[1];
    assert_eq!(short["source"], "resume_short.md");
    assert_eq!(short["overall_verdict"], true);

    let checks: Vec<&str> = short["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["check"].as_str().unwrap())
        .collect();
    assert_eq!(
        checks,
        vec![
            "keyword_match",
            "style",
            "length",
            "sections",
            "impact_language",
            "bullet_format",
        ]
    );
}

#[test]
fn test_json_finding_details() {
    let json = run_and_get_json();
    let findings = json["resumes"][1]["findings"].as_array().unwrap();

    let keyword = &findings[0];
    assert_eq!(keyword["needs_attention"], true);
    assert_eq!(keyword["suggestion"], "Add more job-specific keywords.");
    assert_eq!(keyword["details"]["kind"], "keyword_match");
    assert_eq!(keyword["details"]["total_job_terms"], 35);
    assert!(keyword["details"]["missing"].is_array());

    let style = &findings[1];
    assert_eq!(style["details"]["kind"], "style");
    assert_eq!(style["details"]["issue_count"], 1);
    let issue = &style["details"]["issues"][0];
    assert_eq!(issue["rule_id"], "REPEATED_WORD");
    assert!(issue["offset"].is_u64());

    let length = &findings[2];
    assert_eq!(length["details"]["kind"], "length");
    assert_eq!(length["details"]["verdict"], "too_short");
    assert_eq!(length["details"]["word_count"], 27);

    let sections = &findings[3];
    let present: Vec<bool> = sections["details"]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["present"].as_bool().unwrap())
        .collect();
    assert_eq!(present, vec![true, true, false, false, false]);

    let impact = &findings[4];
    assert_eq!(impact["details"]["soft_skills"], serde_json::json!([]));

    let bullets = &findings[5];
    assert_eq!(bullets["details"]["bullet_lines"], 2);
    assert_eq!(bullets["details"]["inconsistent"], 2);
}

#[test]
fn test_json_omits_suggestion_for_passing_checks() {
    let json = run_and_get_json();
    let findings = json["resumes"][0]["findings"].as_array().unwrap();

    for finding in findings {
        assert_eq!(finding["needs_attention"], false);
        assert!(
            finding.get("suggestion").map(Value::is_null).unwrap_or(true),
            "unexpected suggestion on {}",
            finding["check"]
        );
    }
}
