use crate::model::AnalysisReport;
use crate::prompt::{ENGLISH_MARKER, URDU_MARKER};

/// Prefix for the English section when the completion could not be split.
pub const FALLBACK_NOTICE: &str =
    "--- Could not neatly separate English and Urdu reports. Full AI output below: ---\n\n";

const PREVIEW_CHARS: usize = 500;

/// Split a model completion into English and Urdu sections.
///
/// Uses the first English marker and the first Urdu marker after it. When
/// either is missing the whole completion becomes the English section
/// (behind [`FALLBACK_NOTICE`]) and the Urdu section is empty.
pub fn split_report(completion: &str) -> AnalysisReport {
    if let Some((english, urdu)) = locate_sections(completion) {
        return AnalysisReport {
            english_report: english.trim().to_string(),
            urdu_report: urdu.trim().to_string(),
        };
    }

    tracing::warn!(
        preview = crate::prompt::truncate_chars(completion, PREVIEW_CHARS),
        "could not parse English/Urdu sections from completion"
    );

    AnalysisReport {
        english_report: format!("{FALLBACK_NOTICE}{completion}"),
        urdu_report: String::new(),
    }
}

fn locate_sections(completion: &str) -> Option<(&str, &str)> {
    let en_start = completion.find(ENGLISH_MARKER)? + ENGLISH_MARKER.len();
    let after_en = &completion[en_start..];
    let ur_offset = after_en.find(URDU_MARKER)?;
    Some((
        &after_en[..ur_offset],
        &after_en[ur_offset + URDU_MARKER.len()..],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_both_markers() {
        let completion = "**English Report:**\nSummary A\n**اردو رپورٹ (Urdu Report):**\nخلاصہ";
        let report = split_report(completion);
        assert_eq!(report.english_report, "Summary A");
        assert_eq!(report.urdu_report, "خلاصہ");
    }

    #[test]
    fn preamble_before_english_marker_is_dropped() {
        let completion = format!(
            "Sure, here is the analysis.\n---\n{ENGLISH_MARKER}\n\n### 1. Summary\nLease.\n\n---\n{URDU_MARKER}\n\n### 1. خلاصہ\nکرایہ\n"
        );
        let report = split_report(&completion);
        assert_eq!(report.english_report, "### 1. Summary\nLease.\n\n---");
        assert_eq!(report.urdu_report, "### 1. خلاصہ\nکرایہ");
    }

    #[test]
    fn sections_reconstruct_completion() {
        let head = "intro ";
        let english = "\n  English body  \n";
        let urdu = "\n اردو متن \n";
        let completion = format!("{head}{ENGLISH_MARKER}{english}{URDU_MARKER}{urdu}");
        let report = split_report(&completion);

        let rebuilt = format!(
            "{head}{ENGLISH_MARKER}{}{URDU_MARKER}{}",
            report.english_report, report.urdu_report
        );
        let squash = |s: &str| s.split_whitespace().collect::<String>();
        assert_eq!(squash(&rebuilt), squash(&completion));
        assert!(!report.english_report.contains(URDU_MARKER));
        assert!(!report.urdu_report.contains(ENGLISH_MARKER));
    }

    #[test]
    fn missing_markers_fall_back() {
        let report = split_report("Just some text");
        assert!(report.english_report.starts_with(FALLBACK_NOTICE));
        assert!(report.english_report.contains("Just some text"));
        assert_eq!(report.urdu_report, "");
    }

    #[test]
    fn missing_urdu_marker_falls_back() {
        let report = split_report(&format!("{ENGLISH_MARKER}\nOnly English"));
        assert!(report.english_report.starts_with(FALLBACK_NOTICE));
        assert!(report.urdu_report.is_empty());
    }

    #[test]
    fn urdu_marker_only_before_english_falls_back() {
        let completion = format!("{URDU_MARKER}\nاردو\n{ENGLISH_MARKER}\nEnglish");
        let report = split_report(&completion);
        assert!(report.english_report.starts_with(FALLBACK_NOTICE));
        assert!(report.urdu_report.is_empty());
    }

    #[test]
    fn repeated_markers_use_first_in_order_pair() {
        let completion = format!(
            "{URDU_MARKER} stray {ENGLISH_MARKER} one {URDU_MARKER} two {ENGLISH_MARKER} three"
        );
        let report = split_report(&completion);
        assert_eq!(report.english_report, "one");
        assert_eq!(report.urdu_report, format!("two {ENGLISH_MARKER} three"));
    }

    #[test]
    fn empty_completion_falls_back() {
        let report = split_report("");
        assert_eq!(report.english_report, FALLBACK_NOTICE);
        assert!(report.urdu_report.is_empty());
    }
}
