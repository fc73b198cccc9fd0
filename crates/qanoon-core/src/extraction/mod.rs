pub mod docx;
pub mod pdftotext;
pub mod text;

use crate::error::QanoonError;
use crate::model::{Document, DocumentFormat};

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QanoonError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Extract the text of a document according to its declared format.
pub fn extract_text(document: &Document<'_>, pdf: &dyn PdfExtractor) -> Result<String, QanoonError> {
    let text = match document.format {
        DocumentFormat::Text => text::decode_utf8(document.bytes)?,
        DocumentFormat::Pdf => {
            let pages = pdf.extract_pages(document.bytes)?;
            tracing::debug!(
                backend = pdf.backend_name(),
                page_count = pages.len(),
                "PDF pages extracted"
            );
            join_pages(&pages)
        }
        DocumentFormat::Docx => docx::extract_paragraphs(document.bytes)?,
    };

    tracing::info!(
        document = document.name,
        format = %document.format,
        chars = text.chars().count(),
        "text extraction complete"
    );

    Ok(text)
}

/// Concatenate page texts in page order, each followed by a newline.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut sorted: Vec<&PageContent> = pages.iter().collect();
    sorted.sort_by_key(|p| p.page_number);

    let mut out = String::new();
    for page in sorted {
        out.push_str(&page.text);
        out.push('\n');
    }
    out
}
