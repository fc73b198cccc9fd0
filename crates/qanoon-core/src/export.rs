use std::path::{Path, PathBuf};

use crate::error::QanoonError;
use crate::model::{AnalysisReport, ReportLanguage};

pub const REPORT_EXTENSION: &str = "md";

/// File name for one language of a report, derived from the uploaded
/// document's name: `lease.pdf` becomes `lease_pdf_english_report.md`.
pub fn report_file_name(source_name: &str, language: ReportLanguage) -> String {
    let base = Path::new(source_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(source_name);
    format!(
        "{}{}.{REPORT_EXTENSION}",
        base.replace('.', "_"),
        language.suffix()
    )
}

/// Paths written by [`write_reports`].
#[derive(Debug, Clone)]
pub struct ExportedReports {
    pub english: PathBuf,
    pub urdu: PathBuf,
}

/// Write both report sections verbatim as UTF-8 Markdown into `dir`,
/// creating it if needed. The Urdu file is written even when empty.
pub fn write_reports(
    report: &AnalysisReport,
    source_name: &str,
    dir: &Path,
) -> Result<ExportedReports, QanoonError> {
    std::fs::create_dir_all(dir)?;

    let english = dir.join(report_file_name(source_name, ReportLanguage::English));
    let urdu = dir.join(report_file_name(source_name, ReportLanguage::Urdu));

    std::fs::write(&english, report.english_report.as_bytes())?;
    std::fs::write(&urdu, report.urdu_report.as_bytes())?;

    tracing::info!(
        english = %english.display(),
        urdu = %urdu.display(),
        "reports written"
    );

    Ok(ExportedReports { english, urdu })
}

/// The first `max_chars` characters of extracted text, for confirmation
/// output. Appends an ellipsis when text was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let head = crate::prompt::truncate_chars(text, max_chars);
    if head.len() < text.len() {
        format!("{head}...")
    } else {
        head.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_replace_dots() {
        assert_eq!(
            report_file_name("lease.pdf", ReportLanguage::English),
            "lease_pdf_english_report.md"
        );
        assert_eq!(
            report_file_name("nda.v2.docx", ReportLanguage::Urdu),
            "nda_v2_docx_urdu_report.md"
        );
    }

    #[test]
    fn file_names_ignore_directories() {
        assert_eq!(
            report_file_name("/tmp/uploads/deed.txt", ReportLanguage::English),
            "deed_txt_english_report.md"
        );
    }

    #[test]
    fn writes_both_files_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");
        let report = AnalysisReport {
            english_report: "### 1. Summary\nA lease.".into(),
            urdu_report: "### 1. خلاصہ\nکرایہ نامہ".into(),
        };

        let written = write_reports(&report, "lease.pdf", &out).unwrap();

        assert_eq!(
            std::fs::read_to_string(&written.english).unwrap(),
            report.english_report
        );
        assert_eq!(
            std::fs::read_to_string(&written.urdu).unwrap(),
            report.urdu_report
        );
        assert!(written.urdu.ends_with("lease_pdf_urdu_report.md"));
    }

    #[test]
    fn empty_urdu_section_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let report = AnalysisReport {
            english_report: "fallback".into(),
            urdu_report: String::new(),
        };
        let written = write_reports(&report, "a.txt", dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(written.urdu).unwrap(), "");
    }

    #[test]
    fn preview_marks_cut_text() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
    }
}
