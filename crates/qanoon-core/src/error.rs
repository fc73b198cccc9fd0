#[derive(Debug, thiserror::Error)]
pub enum QanoonError {
    #[error("could not decode text file as UTF-8 (invalid byte at offset {offset})")]
    Decode { offset: usize },

    #[error("could not read document: {0}. Ensure it's not corrupted or protected")]
    Format(String),

    #[error("unsupported file type '{0}'. Please upload .txt, .pdf, or .docx")]
    UnsupportedFormat(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("could not extract text from the document. It might be scanned or protected")]
    EmptyText,

    #[error("invalid or missing API key: {0}. Double-check GEMINI_API_KEY in your environment or .env file")]
    Auth(String),

    #[error("rate limit or quota exceeded: {0}. Please try again later")]
    RateLimit(String),

    #[error("content may violate safety guidelines: {0}. Please use a different document")]
    ContentPolicy(String),

    #[error("document is too long for analysis (token limit exceeded): {0}. Try a shorter document")]
    InputTooLarge(String),

    #[error("unexpected error during AI analysis: {0}. Please try again")]
    UnknownService(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pipeline stage a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extraction,
    Service,
    Pipeline,
}

impl QanoonError {
    pub fn stage(&self) -> Stage {
        match self {
            QanoonError::Decode { .. }
            | QanoonError::Format(_)
            | QanoonError::UnsupportedFormat(_)
            | QanoonError::PdftotextNotFound => Stage::Extraction,
            QanoonError::Auth(_)
            | QanoonError::RateLimit(_)
            | QanoonError::ContentPolicy(_)
            | QanoonError::InputTooLarge(_)
            | QanoonError::UnknownService(_) => Stage::Service,
            QanoonError::EmptyText | QanoonError::Io(_) | QanoonError::Json(_) => Stage::Pipeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_follow_taxonomy() {
        assert_eq!(QanoonError::Decode { offset: 3 }.stage(), Stage::Extraction);
        assert_eq!(
            QanoonError::UnsupportedFormat("rtf".into()).stage(),
            Stage::Extraction
        );
        assert_eq!(QanoonError::RateLimit("429".into()).stage(), Stage::Service);
        assert_eq!(QanoonError::EmptyText.stage(), Stage::Pipeline);
    }

    #[test]
    fn messages_are_user_facing() {
        let err = QanoonError::UnsupportedFormat("rtf".into());
        assert!(err.to_string().contains(".txt, .pdf, or .docx"));
    }
}
