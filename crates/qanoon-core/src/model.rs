use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::QanoonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Text,
    Pdf,
    Docx,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Text => write!(f, "txt"),
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
        }
    }
}

impl DocumentFormat {
    /// Derive the format from a file name's extension (case-insensitive).
    pub fn from_filename(name: &str) -> Result<DocumentFormat, QanoonError> {
        let base = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);
        let ext = base
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(DocumentFormat::Text),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "" => Err(QanoonError::UnsupportedFormat(name.to_string())),
            other => Err(QanoonError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

/// An uploaded document, alive for the duration of a single analysis.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub name: &'a str,
    pub bytes: &'a [u8],
    pub format: DocumentFormat,
}

impl<'a> Document<'a> {
    pub fn from_upload(name: &'a str, bytes: &'a [u8]) -> Result<Document<'a>, QanoonError> {
        let format = DocumentFormat::from_filename(name)?;
        Ok(Document {
            name,
            bytes,
            format,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub english_report: String,
    /// Empty when the completion could not be split into sections.
    pub urdu_report: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLanguage {
    English,
    Urdu,
}

impl ReportLanguage {
    pub fn suffix(&self) -> &'static str {
        match self {
            ReportLanguage::English => "_english_report",
            ReportLanguage::Urdu => "_urdu_report",
        }
    }
}

impl fmt::Display for ReportLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLanguage::English => write!(f, "English"),
            ReportLanguage::Urdu => write!(f, "Urdu"),
        }
    }
}

/// Result of running the full pipeline over one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub source_name: String,
    pub format: DocumentFormat,
    pub extracted_chars: usize,
    pub truncated: bool,
    pub report: AnalysisReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_filename("contract.TXT").unwrap(),
            DocumentFormat::Text
        );
        assert_eq!(
            DocumentFormat::from_filename("Lease.Pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_filename("nda.final.docx").unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn bare_extension_names_are_accepted() {
        assert_eq!(
            DocumentFormat::from_filename(".pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_filename("uploads/.TXT").unwrap(),
            DocumentFormat::Text
        );
    }

    #[test]
    fn language_labels_and_suffixes() {
        assert_eq!(ReportLanguage::English.to_string(), "English");
        assert_eq!(ReportLanguage::Urdu.to_string(), "Urdu");
        assert_eq!(ReportLanguage::Urdu.suffix(), "_urdu_report");
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        for name in ["memo.rtf", "scan.png", "README", "archive.doc", "lease.pdf."] {
            let err = DocumentFormat::from_filename(name).unwrap_err();
            assert!(
                matches!(err, QanoonError::UnsupportedFormat(_)),
                "{name} should be unsupported"
            );
        }
    }

    #[test]
    fn report_serializes_with_snake_case_fields() {
        let report = AnalysisReport {
            english_report: "Summary".into(),
            urdu_report: "خلاصہ".into(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["english_report"], "Summary");
        assert_eq!(json["urdu_report"], "خلاصہ");
    }
}
