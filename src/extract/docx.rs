//! Text extraction from Word (.docx) résumés.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use super::{read_supported, DocumentExtractor};
use crate::error::AnalysisError;

/// Reads the body paragraphs of .docx files, one line per paragraph.
///
/// Only text runs directly inside body paragraphs are read; tables,
/// headers and text boxes are skipped.
#[derive(Debug, Default, Clone)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for DocxExtractor {
    fn extensions(&self) -> &[&'static str] {
        &["docx"]
    }

    fn extract(&self, path: &Path) -> Result<String, AnalysisError> {
        let bytes = read_supported(self, path)?;
        docx_text(&bytes).map_err(|reason| AnalysisError::unreadable(path, reason))
    }
}

fn docx_text(bytes: &[u8]) -> Result<String, String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| format!("not a readable DOCX file: {}", e))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for part in &paragraph.children {
                if let ParagraphChild::Run(run) = part {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    if text.trim().is_empty() {
        return Err("no text found in DOCX file".to_string());
    }
    Ok(text)
}
