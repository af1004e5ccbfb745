//! Turning résumé files into plain text.
//!
//! The analyzer only ever sees text. Each format has its own
//! [`DocumentExtractor`]; [`ResumeExtractor`] picks one by file extension.

mod docx;
mod pdf;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::AnalysisError;

/// Something that can produce plain text from a résumé file.
pub trait DocumentExtractor: Send + Sync {
    /// File extensions (lowercase, without the dot) this extractor reads.
    fn extensions(&self) -> &[&'static str];

    /// Extract the text of `path`.
    ///
    /// Fails with `UnreadableDocument` for missing, unsupported or corrupt
    /// files.
    fn extract(&self, path: &Path) -> Result<String, AnalysisError>;

    /// Whether `path` has an extension this extractor reads.
    fn supports(&self, path: &Path) -> bool {
        extension(path)
            .map(|ext| self.extensions().contains(&ext.as_str()))
            .unwrap_or(false)
    }
}

/// Reads UTF-8 text files.
#[derive(Debug, Default, Clone)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PlainTextExtractor {
    fn extensions(&self) -> &[&'static str] {
        &["txt", "text", "md"]
    }

    fn extract(&self, path: &Path) -> Result<String, AnalysisError> {
        let bytes = read_supported(self, path)?;
        let text = String::from_utf8(bytes)
            .map_err(|_| AnalysisError::unreadable(path, "file is not valid UTF-8 text"))?;

        // Drop a UTF-8 byte-order mark left by some editors
        Ok(text.trim_start_matches('\u{feff}').to_string())
    }
}

/// Reads every supported résumé format, choosing the extractor by
/// extension.
#[derive(Debug, Default, Clone)]
pub struct ResumeExtractor {
    plain: PlainTextExtractor,
    pdf: PdfExtractor,
    docx: DocxExtractor,
}

impl ResumeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    fn delegate(&self, path: &Path) -> Option<&dyn DocumentExtractor> {
        [
            &self.plain as &dyn DocumentExtractor,
            &self.pdf,
            &self.docx,
        ]
        .into_iter()
        .find(|e| e.supports(path))
    }
}

impl DocumentExtractor for ResumeExtractor {
    fn extensions(&self) -> &[&'static str] {
        &["txt", "text", "md", "pdf", "docx"]
    }

    fn extract(&self, path: &Path) -> Result<String, AnalysisError> {
        match self.delegate(path) {
            Some(extractor) => extractor.extract(path),
            None => Err(unsupported(path, self.extensions())),
        }
    }
}

/// Read the raw bytes of `path`, rejecting extensions `extractor` does not
/// handle.
fn read_supported(extractor: &dyn DocumentExtractor, path: &Path) -> Result<Vec<u8>, AnalysisError> {
    if !extractor.supports(path) {
        return Err(unsupported(path, extractor.extensions()));
    }
    fs::read(path).map_err(|e| AnalysisError::unreadable(path, e))
}

fn unsupported(path: &Path, extensions: &[&str]) -> AnalysisError {
    AnalysisError::unreadable(
        path,
        format!(
            "unsupported file type (expected one of: {})",
            extensions.join(", ")
        ),
    )
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Expand directories into the résumé files the extractor supports.
///
/// Plain file arguments are kept as given, even when unsupported, so the
/// extractor can report them. Hidden directories are skipped. Results from
/// each directory are sorted by path.
pub fn collect_documents(
    inputs: &[PathBuf],
    extractor: &dyn DocumentExtractor,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            documents.push(input.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(input)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| {
                let hidden = e.file_name().to_string_lossy().starts_with('.');
                e.depth() == 0 || !hidden
            })
        {
            let entry = entry?;
            if entry.file_type().is_file() && extractor.supports(entry.path()) {
                found.push(entry.path().to_path_buf());
            }
        }
        found.sort();
        documents.extend(found);
    }

    Ok(documents)
}
