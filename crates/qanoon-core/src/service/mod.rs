pub mod gemini;

use crate::error::QanoonError;

/// Trait for remote text-generation backends.
pub trait ReportService: Send + Sync {
    /// Send the rendered prompt and return the full completion text.
    /// Implementations make at most one remote call per invocation.
    fn generate_report(&self, prompt: &str) -> Result<String, QanoonError>;

    /// Name of this service backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Map a remote failure onto the error taxonomy.
///
/// `status` is the HTTP status code and `api_status` the provider's
/// canonical error status (e.g. `RESOURCE_EXHAUSTED`), when known.
pub fn classify_failure(status: Option<u16>, api_status: Option<&str>, message: &str) -> QanoonError {
    let detail = if message.trim().is_empty() {
        match status {
            Some(code) => format!("HTTP {code}"),
            None => "no error message".to_string(),
        }
    } else {
        message.trim().to_string()
    };

    match status {
        Some(429) => return QanoonError::RateLimit(detail),
        Some(401) | Some(403) => return QanoonError::Auth(detail),
        Some(413) => return QanoonError::InputTooLarge(detail),
        _ => {}
    }

    match api_status {
        Some("RESOURCE_EXHAUSTED") => return QanoonError::RateLimit(detail),
        Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED") => {
            return QanoonError::Auth(detail)
        }
        _ => {}
    }

    let lower = detail.to_lowercase();
    if lower.contains("quota") || lower.contains("rate limit") {
        QanoonError::RateLimit(detail)
    } else if lower.contains("authentication")
        || lower.contains("api key")
        || lower.contains("unauthorized")
    {
        QanoonError::Auth(detail)
    } else if lower.contains("content_filter") || lower.contains("safety") {
        QanoonError::ContentPolicy(detail)
    } else if lower.contains("token") && (lower.contains("exceed") || lower.contains("too long")) {
        QanoonError::InputTooLarge(detail)
    } else {
        QanoonError::UnknownService(detail)
    }
}
