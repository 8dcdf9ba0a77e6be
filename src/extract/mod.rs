//! Document text extraction
//!
//! Syllabi arrive as PDFs most of the time, occasionally as plain text or
//! markdown exports. Either way the rest of the pipeline only sees a `String`.

pub mod error;

pub use error::{ExtractError, Result};

use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Produces plain text from raw document bytes
pub trait TextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

/// Kind of document, sniffed from its leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    pub fn detect(bytes: &[u8]) -> Self {
        // PDF header may follow a few bytes of junk
        let head = &bytes[..bytes.len().min(1024)];
        if head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC) {
            Self::Pdf
        } else {
            Self::PlainText
        }
    }
}

/// Text layer of a PDF, all pages joined
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}

/// UTF-8 text as-is; invalid sequences are replaced rather than rejected
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Picks [`PdfExtractor`] or [`PlainTextExtractor`] per document
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoExtractor;

impl TextExtractor for AutoExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let kind = DocumentKind::detect(bytes);
        debug!("Extracting text from {:?} document ({} bytes)", kind, bytes.len());
        match kind {
            DocumentKind::Pdf => PdfExtractor.extract_text(bytes),
            DocumentKind::PlainText => PlainTextExtractor.extract_text(bytes),
        }
    }
}
