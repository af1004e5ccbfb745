//! End-to-end analysis of the résumés in testdata.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use resumecheck::checks::LengthVerdict;
use resumecheck::extract::collect_documents;
use resumecheck::{
    AnalysisError, Analyzer, CheckId, DocumentExtractor, FindingDetails, PlainTextExtractor,
    Profile, StyleError, StyleIssue, StyleService,
};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn read(name: &str) -> String {
    PlainTextExtractor::new()
        .extract(&testdata_path().join(name))
        .expect("should read fixture")
}

fn offline_analyzer() -> Analyzer {
    resumecheck::init();
    let profile =
        Profile::parse_file(testdata_path().join("profile_offline.yaml")).expect("should parse profile");
    Analyzer::new(profile).expect("should build analyzer")
}

fn flagged(report: &resumecheck::AnalysisReport) -> Vec<CheckId> {
    report.flagged().map(|f| f.check).collect()
}

/// Style service that fails every request.
struct Offline;

#[async_trait]
impl StyleService for Offline {
    fn name(&self) -> &str {
        "offline"
    }

    async fn check(&self, _text: &str, _locale: &str) -> Result<Vec<StyleIssue>, StyleError> {
        Err(StyleError::Unavailable("connection refused".to_string()))
    }
}

/// Style service that reports a fixed number of issues.
struct Noisy(usize);

#[async_trait]
impl StyleService for Noisy {
    fn name(&self) -> &str {
        "noisy"
    }

    async fn check(&self, _text: &str, _locale: &str) -> Result<Vec<StyleIssue>, StyleError> {
        Ok((0..self.0)
            .map(|i| StyleIssue::new(format!("issue {}", i)).at(i, 1))
            .collect())
    }
}

#[test]
fn test_strong_resume_is_ready() {
    let analyzer = offline_analyzer();
    let report = analyzer
        .analyze(&read("resume_strong.txt"), &read("job_backend.txt"))
        .expect("analysis should succeed");

    assert!(!report.overall_verdict(), "flagged: {:?}", flagged(&report));
    assert!(!report.is_degraded());
    assert_eq!(
        report.verdict_message(),
        "Your resume looks well-optimized for the job description."
    );

    let checks: Vec<CheckId> = report.findings().iter().map(|f| f.check).collect();
    assert_eq!(checks, CheckId::ALL.to_vec());

    match &report.finding(CheckId::KeywordMatch).unwrap().details {
        FindingDetails::KeywordMatch {
            match_count,
            total_job_terms,
            percentage,
            missing,
            ..
        } => {
            assert_eq!(*total_job_terms, 35);
            assert_eq!(*match_count, 29);
            assert!(*percentage > 80.0);
            assert!(missing.contains(&"hiring".to_string()));
        }
        other => panic!("unexpected details: {:?}", other),
    }

    match &report.finding(CheckId::Length).unwrap().details {
        FindingDetails::Length { word_count, verdict } => {
            assert!((300..=800).contains(word_count));
            assert_eq!(*verdict, LengthVerdict::Good);
        }
        other => panic!("unexpected details: {:?}", other),
    }

    match &report.finding(CheckId::Style).unwrap().details {
        FindingDetails::Style { issue_count, .. } => assert_eq!(*issue_count, 0),
        other => panic!("unexpected details: {:?}", other),
    }
}

#[test]
fn test_short_resume_needs_work() {
    let analyzer = offline_analyzer();
    let report = analyzer
        .analyze(&read("resume_short.md"), &read("job_backend.txt"))
        .expect("analysis should succeed");

    assert!(report.overall_verdict());
    assert_eq!(
        flagged(&report),
        vec![
            CheckId::KeywordMatch,
            CheckId::Length,
            CheckId::Sections,
            CheckId::ImpactLanguage,
            CheckId::BulletFormat,
        ]
    );

    let sections = report.finding(CheckId::Sections).unwrap();
    assert_eq!(sections.summary, "Missing: skills, projects, certifications");

    let bullets = report.finding(CheckId::BulletFormat).unwrap();
    assert_eq!(bullets.summary, "2 total, 2 inconsistent");

    // One repeated word, well under the limit
    let style = report.finding(CheckId::Style).unwrap();
    assert!(!style.needs_attention);
    assert_eq!(style.summary, "1 issue reported by local");
}

#[test]
fn test_each_check_flags_in_isolation() {
    let analyzer = offline_analyzer();
    let strong = read("resume_strong.txt");
    let job = read("job_backend.txt");

    // Unrelated job posting
    let report = analyzer
        .analyze(&strong, "Pastry chef wanted: croissants brioche tarts")
        .unwrap();
    assert_eq!(flagged(&report), vec![CheckId::KeywordMatch]);

    // Too long
    let padded = format!(
        "{}{}",
        strong,
        "Volunteer work included logistics support for community events.\n".repeat(40)
    );
    let report = analyzer.analyze(&padded, &job).unwrap();
    assert_eq!(flagged(&report), vec![CheckId::Length]);
    assert!(report
        .finding(CheckId::Length)
        .unwrap()
        .summary
        .starts_with("Too long"));

    // Missing section
    let no_certs = strong.replace("\nCertifications\n", "\nLicenses\n");
    let report = analyzer.analyze(&no_certs, &job).unwrap();
    assert_eq!(flagged(&report), vec![CheckId::Sections]);
    assert_eq!(
        report.finding(CheckId::Sections).unwrap().summary,
        "Missing: certifications"
    );

    // No soft skills
    let no_soft_skills = strong
        .replace(
            "- People: leadership, communication, teamwork, mentoring, problem solving, adaptability\n",
            "",
        )
        .replace("clear communication", "clear writing")
        .replace("teamwork", "calm");
    let report = analyzer.analyze(&no_soft_skills, &job).unwrap();
    assert_eq!(flagged(&report), vec![CheckId::ImpactLanguage]);

    // One malformed bullet
    let sloppy = strong.replace("- Led a team of six", "-Led a team of six");
    let report = analyzer.analyze(&sloppy, &job).unwrap();
    assert_eq!(flagged(&report), vec![CheckId::BulletFormat]);
    assert_eq!(
        report.finding(CheckId::BulletFormat).unwrap().summary,
        "26 total, 1 inconsistent"
    );
}

#[test]
fn test_style_check_flags_many_issues() {
    let analyzer = Analyzer::with_style_service(Profile::default(), Arc::new(Noisy(11)));
    let report = analyzer
        .analyze(&read("resume_strong.txt"), &read("job_backend.txt"))
        .unwrap();

    assert_eq!(flagged(&report), vec![CheckId::Style]);
    let style = report.finding(CheckId::Style).unwrap();
    assert_eq!(style.summary, "11 issues reported by noisy");
    match &style.details {
        FindingDetails::Style { issue_count, issues } => {
            assert_eq!(*issue_count, 11);
            assert_eq!(issues.len(), 5);
            assert_eq!(issues[0].message, "issue 0");
        }
        other => panic!("unexpected details: {:?}", other),
    }
}

#[test]
fn test_unreachable_style_service_degrades() {
    let analyzer = Analyzer::with_style_service(Profile::default(), Arc::new(Offline));
    let report = analyzer
        .analyze(&read("resume_strong.txt"), &read("job_backend.txt"))
        .unwrap();

    // The other five checks still ran and the verdict ignores the gap
    assert!(!report.overall_verdict());
    assert!(report.is_degraded());
    assert_eq!(report.findings().len(), 6);

    let style = report.finding(CheckId::Style).unwrap();
    assert!(style.is_degraded());
    assert!(style.summary.contains("connection refused"));
}

#[test]
fn test_empty_inputs_are_rejected() {
    let analyzer = offline_analyzer();
    let strong = read("resume_strong.txt");

    assert!(matches!(
        analyzer.analyze(&strong, ""),
        Err(AnalysisError::InvalidInput(_))
    ));
    assert!(matches!(
        analyzer.analyze("  \n ", "Rust engineer"),
        Err(AnalysisError::InvalidInput(_))
    ));
}

#[test]
fn test_analyze_testdata_directory() {
    let analyzer = offline_analyzer();
    let extractor = PlainTextExtractor::new();
    let documents = collect_documents(&[testdata_path()], &extractor).unwrap();

    let names: Vec<String> = documents
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["job_backend.txt", "resume_short.md", "resume_strong.txt"]
    );

    let texts: Vec<String> = documents
        .iter()
        .map(|p| extractor.extract(p).unwrap())
        .collect();
    let job = read("job_backend.txt");
    let reports = analyzer.analyze_many(&texts, &job);

    assert_eq!(reports.len(), 3);
    let verdicts: Vec<bool> = reports
        .into_iter()
        .map(|r| r.unwrap().overall_verdict())
        .collect();
    // The job posting against itself is short and lacks sections
    assert_eq!(verdicts, vec![true, true, false]);
}
