//! Text extraction from PDF résumés.

use std::path::Path;

use lopdf::Document;
use tracing::warn;

use super::{read_supported, DocumentExtractor};
use crate::error::AnalysisError;

/// Reads the text layer of PDF files, page by page.
///
/// Scanned PDFs without a text layer yield no text and are reported as
/// unreadable.
#[derive(Debug, Default, Clone)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PdfExtractor {
    fn extensions(&self) -> &[&'static str] {
        &["pdf"]
    }

    fn extract(&self, path: &Path) -> Result<String, AnalysisError> {
        let bytes = read_supported(self, path)?;
        pdf_text(&bytes).map_err(|reason| AnalysisError::unreadable(path, reason))
    }
}

fn pdf_text(bytes: &[u8]) -> Result<String, String> {
    let doc = Document::load_mem(bytes).map_err(|e| format!("not a readable PDF: {}", e))?;

    let mut text = String::new();
    for page in doc.get_pages().keys() {
        match doc.extract_text(&[*page]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => warn!(page = *page, error = %e, "skipping PDF page without extractable text"),
        }
    }

    if text.trim().is_empty() {
        return Err("no text found in PDF".to_string());
    }
    Ok(text.trim().to_string())
}
