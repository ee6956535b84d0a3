pub mod pdftotext;

use crate::error::EcadError;

/// Content extracted from a single page of a PDF.
///
/// `text` is `None` when the page carries no extractable text (scanned
/// image, blank page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: usize,
    pub text: Option<String>,
}

impl PageContent {
    pub fn new(page_number: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        PageContent {
            page_number,
            text: if text.trim().is_empty() { None } else { Some(text) },
        }
    }

    pub fn empty(page_number: usize) -> Self {
        PageContent {
            page_number,
            text: None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.as_deref().into_iter().flat_map(str::lines)
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, EcadError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split already-extracted text into pages on form feed characters.
///
/// This is the page separator pdftotext emits; a trailing separator after
/// the last page does not produce an extra page.
pub fn pages_from_text(text: &str) -> Vec<PageContent> {
    let mut chunks: Vec<&str> = text.split('\x0c').collect();
    if chunks.len() > 1 && chunks.last().is_some_and(|c| c.trim().is_empty()) {
        chunks.pop();
    }

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| PageContent::new(i + 1, chunk))
        .collect()
}
