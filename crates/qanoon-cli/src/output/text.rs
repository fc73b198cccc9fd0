use qanoon_core::model::Analysis;

pub fn print(analysis: &Analysis) {
    println!("{}", format_analysis(analysis));
}

pub fn format_analysis(analysis: &Analysis) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Document: {} ({}, {} characters{})\n\n",
        analysis.source_name,
        analysis.format,
        analysis.extracted_chars,
        if analysis.truncated {
            ", truncated for analysis"
        } else {
            ""
        }
    ));

    out.push_str("=== AI Analysis Report (English) ===\n\n");
    out.push_str(&analysis.report.english_report);
    out.push_str("\n\n");

    out.push_str("=== قانونی تجزیہ رپورٹ (اردو) ===\n\n");
    if analysis.report.urdu_report.is_empty() {
        out.push_str("(no separate Urdu section; see the English report above)\n");
    } else {
        out.push_str(&analysis.report.urdu_report);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use qanoon_core::model::{AnalysisReport, DocumentFormat};

    fn analysis(urdu: &str, truncated: bool) -> Analysis {
        Analysis {
            source_name: "lease.pdf".into(),
            format: DocumentFormat::Pdf,
            extracted_chars: 1234,
            truncated,
            report: AnalysisReport {
                english_report: "Summary A".into(),
                urdu_report: urdu.into(),
            },
        }
    }

    #[test]
    fn includes_both_sections() {
        let text = format_analysis(&analysis("خلاصہ", false));
        assert!(text.starts_with("Document: lease.pdf (pdf, 1234 characters)"));
        assert!(text.contains("Summary A"));
        assert!(text.contains("خلاصہ"));
    }

    #[test]
    fn notes_missing_urdu_section_and_truncation() {
        let text = format_analysis(&analysis("", true));
        assert!(text.contains("truncated for analysis"));
        assert!(text.contains("no separate Urdu section"));
    }
}
