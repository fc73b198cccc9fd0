use qanoon_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use super::{ensure_pdf_backend, read_upload};

pub fn run(input_file: PathBuf, preview: Option<usize>) -> Result<(), qanoon_core::error::QanoonError> {
    let (name, bytes) = read_upload(&input_file)?;
    let extractor = PdftotextExtractor::new();
    ensure_pdf_backend(&name, &extractor)?;
    let text = qanoon_core::extract_document(&bytes, &name, &extractor)?;

    if text.trim().is_empty() {
        return Err(qanoon_core::error::QanoonError::EmptyText);
    }

    match preview {
        Some(n) => {
            eprintln!(
                "Successfully extracted {} characters from '{}'",
                text.chars().count(),
                name
            );
            println!("{}", qanoon_core::export::preview(&text, n));
        }
        None => print!("{text}"),
    }

    Ok(())
}
