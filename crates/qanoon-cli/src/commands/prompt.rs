use qanoon_core::error::QanoonError;
use qanoon_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use super::{ensure_pdf_backend, read_upload};

pub fn run(input_file: PathBuf) -> Result<(), QanoonError> {
    let (name, bytes) = read_upload(&input_file)?;
    let extractor = PdftotextExtractor::new();
    ensure_pdf_backend(&name, &extractor)?;
    let text = qanoon_core::extract_document(&bytes, &name, &extractor)?;

    if text.trim().is_empty() {
        return Err(QanoonError::EmptyText);
    }

    print!("{}", qanoon_core::prompt::build_prompt(&text));
    Ok(())
}
