pub mod pdftotext;

use crate::error::SuncheckError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    pub fn new(page_number: usize, lines: Vec<String>) -> Self {
        PageContent { page_number, lines }
    }

    /// Build a page by splitting raw page text on newlines.
    pub fn from_text(page_number: usize, text: &str) -> Self {
        PageContent {
            page_number,
            lines: text.lines().map(|l| l.to_string()).collect(),
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SuncheckError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
