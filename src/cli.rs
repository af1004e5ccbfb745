//! Command-line interface for resumecheck.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::checks::Analyzer;
use crate::extract::{self, DocumentExtractor, ResumeExtractor};
use crate::profile::{self, Profile, StyleBackend};
use crate::report::{self, ResumeReport};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RESUMECHECK_LOG";

/// Résumé quality gate - check a résumé against a job description.
///
/// Resumecheck compares a résumé with a job posting and flags what to
/// improve: missing keywords, grammar and style issues, length, missing
/// sections, weak impact language and inconsistent bullet formatting.
#[derive(Parser)]
#[command(name = "resumecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one or more résumés against a job description
    #[command(visible_alias = "check")]
    Analyze(AnalyzeArgs),
    /// Create a new resumecheck profile from a template
    Init(InitArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Résumé files or directories (.txt, .text, .md, .pdf, .docx)
    #[arg(required = true)]
    pub resumes: Vec<PathBuf>,

    /// File containing the job description
    #[arg(short, long, conflicts_with = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description given inline
    #[arg(long)]
    pub job_text: Option<String>,

    /// Path to profile YAML file (default: auto-discover)
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Use the offline style rules instead of the configured service
    #[arg(long)]
    pub skip_style_check: bool,

    /// Locale passed to the style service (overrides the profile)
    #[arg(long)]
    pub locale: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "resumecheck.yaml")]
    pub output: PathBuf,

    /// Template to use
    #[arg(short, long, default_value = "default")]
    pub template: String,

    /// List available templates
    #[arg(short, long)]
    pub list: bool,
}

/// Available profile templates.
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

/// All available templates.
pub static TEMPLATES: &[Template] = &[
    Template {
        name: "default",
        description: "General-purpose heuristics, LanguageTool style checks",
        content: include_str!("templates/default.yaml"),
    },
    Template {
        name: "offline",
        description: "General-purpose heuristics, built-in offline style rules",
        content: include_str!("templates/offline.yaml"),
    },
    Template {
        name: "academic",
        description: "Academic CV: publications, research, teaching",
        content: include_str!("templates/academic.yaml"),
    },
];

/// Install the stderr log subscriber.
///
/// `RESUMECHECK_LOG` takes precedence; otherwise only warnings are shown,
/// or debug output for this crate with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "resumecheck=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

/// Load the profile from `--profile`, a discovered file or the defaults.
/// Returns the profile and a label describing where it came from.
fn load_profile(explicit: Option<&Path>) -> anyhow::Result<(Profile, String)> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => profile::discover(),
    };

    match path {
        Some(path) => {
            let profile = Profile::parse_file(&path)
                .map_err(|e| anyhow::anyhow!("parsing profile {}: {}", path.display(), e))?;
            tracing::debug!(path = %path.display(), "loaded profile");
            Ok((profile, path.to_string_lossy().to_string()))
        }
        None => Ok((Profile::default(), "(built-in defaults)".to_string())),
    }
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Load and validate profile
    let (mut profile, profile_label) = match load_profile(args.profile.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    if args.skip_style_check {
        profile.style.service = StyleBackend::Local;
    }
    if let Some(locale) = &args.locale {
        profile.style.locale = locale.clone();
    }
    if let Err(e) = profile::validate(&profile) {
        eprintln!("Error: invalid profile: {}", e);
        return Ok(EXIT_ERROR);
    }

    let extractor = ResumeExtractor::new();

    // Job description
    let (job_text, job_label) = match (&args.job, &args.job_text) {
        (Some(path), _) => match read_job_file(path) {
            Ok(text) => (text, path.to_string_lossy().to_string()),
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(EXIT_ERROR);
            }
        },
        (None, Some(text)) => (text.clone(), "(inline)".to_string()),
        (None, None) => {
            eprintln!("Error: a job description is required (--job <FILE> or --job-text <TEXT>)");
            return Ok(EXIT_ERROR);
        }
    };

    // Résumés: every document must be readable before any analysis runs
    let documents = extract::collect_documents(&args.resumes, &extractor)?;
    if documents.is_empty() {
        eprintln!("Error: no résumé files found");
        return Ok(EXIT_ERROR);
    }

    let mut texts = Vec::with_capacity(documents.len());
    for path in &documents {
        match extractor.extract(path) {
            Ok(text) => texts.push(text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    // Run analysis
    let analyzer = Analyzer::new(profile)?;
    let mut results = Vec::with_capacity(documents.len());
    for (path, outcome) in documents.iter().zip(analyzer.analyze_many(&texts, &job_text)) {
        match outcome {
            Ok(report) => results.push(ResumeReport {
                source: path.to_string_lossy().to_string(),
                report,
            }),
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    // Output results
    match args.format.as_str() {
        "json" => report::write_json(&job_label, &profile_label, &results)?,
        _ => report::write_pretty(&job_label, &profile_label, &results),
    }

    if results.iter().any(|r| r.report.overall_verdict()) {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Job descriptions are always plain text, whatever the extension.
fn read_job_file(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("cannot read job description {}: {}", path.display(), e))?;
    String::from_utf8(bytes)
        .map_err(|_| anyhow::anyhow!("job description {} is not UTF-8 text", path.display()))
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // List mode
    if args.list {
        return list_templates();
    }

    // Find template
    let template = match TEMPLATES.iter().find(|t| t.name == args.template) {
        Some(t) => t,
        None => {
            eprintln!("Error: unknown template {:?}", args.template);
            eprintln!("Run 'resumecheck init --list' to see available templates");
            return Ok(EXIT_ERROR);
        }
    };

    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    // Write profile file
    if let Err(e) = std::fs::write(&args.output, template.content) {
        eprintln!("Error: failed to write profile: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {} from template '{}'", args.output.display(), template.name);
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to match the roles you apply for", args.output.display());
    println!(
        "  2. Run: resumecheck analyze resume.txt --job job.txt --profile {}",
        args.output.display()
    );

    Ok(EXIT_SUCCESS)
}

/// List available templates.
fn list_templates() -> anyhow::Result<i32> {
    println!("Available templates:");
    println!();

    for template in TEMPLATES {
        let name = if template.name == "default" {
            format!("{} (default)", template.name)
        } else {
            template.name.to_string()
        };
        println!("  {:<20} {}", name, template.description);
    }

    println!();
    println!("Usage:");
    println!("  resumecheck init --template <name>");

    Ok(EXIT_SUCCESS)
}
