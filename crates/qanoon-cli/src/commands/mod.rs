pub mod analyze;
pub mod extract;
pub mod prompt;

use qanoon_core::error::QanoonError;
use qanoon_core::extraction::pdftotext::PdftotextExtractor;
use qanoon_core::model::DocumentFormat;
use std::path::Path;

/// Read a document from disk, returning its file name and bytes.
fn read_upload(path: &Path) -> Result<(String, Vec<u8>), QanoonError> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((name, bytes))
}

/// Fail with `PdftotextNotFound` up front when a PDF is given and the
/// extractor's executable cannot be run. Other formats never need it.
fn ensure_pdf_backend(name: &str, extractor: &PdftotextExtractor) -> Result<(), QanoonError> {
    if DocumentFormat::from_filename(name).ok() == Some(DocumentFormat::Pdf)
        && !extractor.is_available()
    {
        return Err(QanoonError::PdftotextNotFound);
    }
    Ok(())
}
