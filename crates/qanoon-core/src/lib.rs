pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod prompt;
pub mod service;
pub mod split;

use error::QanoonError;
use extraction::PdfExtractor;
use model::{Analysis, AnalysisReport, Document, DocumentFormat};
use service::ReportService;

/// Extract the text of an uploaded document.
///
/// The format is derived from `filename`; unsupported extensions fail
/// before any bytes are inspected.
pub fn extract_document(
    bytes: &[u8],
    filename: &str,
    pdf: &dyn PdfExtractor,
) -> Result<String, QanoonError> {
    load_document(bytes, filename, pdf).map(|(_, text)| text)
}

fn load_document(
    bytes: &[u8],
    filename: &str,
    pdf: &dyn PdfExtractor,
) -> Result<(DocumentFormat, String), QanoonError> {
    let document = Document::from_upload(filename, bytes)?;
    let text = extraction::extract_text(&document, pdf)?;
    Ok((document.format, text))
}

/// Analyze already-extracted text: build the prompt, call the service once
/// and split the completion into English and Urdu sections.
///
/// Blank text is refused with `EmptyText` without contacting the service.
pub fn analyze_text(text: &str, service: &dyn ReportService) -> Result<AnalysisReport, QanoonError> {
    if text.trim().is_empty() {
        return Err(QanoonError::EmptyText);
    }

    let prompt = prompt::build_prompt(text);
    tracing::debug!(
        backend = service.backend_name(),
        prompt_bytes = prompt.len(),
        "prompt rendered"
    );

    let completion = service.generate_report(&prompt)?;
    Ok(split::split_report(&completion))
}

/// Main API entry point: run the full document-to-report pipeline.
pub fn analyze_document(
    bytes: &[u8],
    filename: &str,
    pdf: &dyn PdfExtractor,
    service: &dyn ReportService,
) -> Result<Analysis, QanoonError> {
    let (format, text) = load_document(bytes, filename, pdf)?;
    let extracted_chars = text.chars().count();

    let report = analyze_text(&text, service)?;

    Ok(Analysis {
        source_name: filename.to_string(),
        format,
        extracted_chars,
        truncated: extracted_chars > prompt::MAX_DOCUMENT_CHARS,
        report,
    })
}
