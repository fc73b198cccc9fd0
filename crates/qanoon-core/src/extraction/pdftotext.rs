use crate::error::QanoonError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

const PDF_SIGNATURE: &[u8] = b"%PDF-";
const DEFAULT_BINARY: &str = "pdftotext";

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs in raw reading-order mode (no `-layout`), since the text is fed to
/// a language model rather than parsed as tables.
pub struct PdftotextExtractor {
    binary: PathBuf,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_BINARY)
    }

    /// Use a specific pdftotext executable instead of the one on `PATH`.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        PdftotextExtractor {
            binary: binary.into(),
        }
    }

    /// Check if the pdftotext executable can be run.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QanoonError> {
        check_signature(pdf_bytes)?;

        let mut tmpfile = tempfile::NamedTempFile::new()?;
        tmpfile.write_all(pdf_bytes)?;
        let tmp_path = tmpfile.path().to_path_buf();

        let output = Command::new(&self.binary)
            .arg("-enc")
            .arg("UTF-8")
            .arg(&tmp_path)
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    QanoonError::PdftotextNotFound
                } else {
                    QanoonError::Format(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(code, &stderr));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn check_signature(pdf_bytes: &[u8]) -> Result<(), QanoonError> {
    let start = pdf_bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(pdf_bytes.len());
    if pdf_bytes[start..].starts_with(PDF_SIGNATURE) {
        Ok(())
    } else {
        Err(QanoonError::Format("not a valid PDF (missing %PDF header)".into()))
    }
}

/// Map a pdftotext exit status onto an extraction error.
///
/// Exit code 1 covers open failures (including a wrong/missing password),
/// 3 is a permissions error on a protected file.
fn classify_failure(code: i32, stderr: &str) -> QanoonError {
    let lower = stderr.to_lowercase();
    let detail = stderr.trim();
    if code == 3 || lower.contains("password") || lower.contains("encrypt") {
        QanoonError::Format(format!("PDF is encrypted or protected ({detail})"))
    } else {
        QanoonError::Format(format!(
            "not a valid PDF (pdftotext exit code {code}: {detail})"
        ))
    }
}

/// Split pdftotext output into pages. Every page, including the last, is
/// terminated by a form feed.
fn split_pages(text: &str) -> Vec<PageContent> {
    let body = text.strip_suffix('\x0c').unwrap_or(text);
    body.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            text: page_text.trim_end_matches('\n').to_string(),
        })
        .collect()
}
