use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::{GeminiConfig, API_KEY_VAR};
use crate::error::QanoonError;
use crate::service::{classify_failure, ReportService};

const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

/// Blocking client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    status: Option<String>,
}

impl GeminiClient {
    /// Build a client. Fails with `Auth` if no API key is configured, before
    /// any network activity.
    pub fn new(config: GeminiConfig) -> Result<Self, QanoonError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| QanoonError::UnknownService(format!("failed to build HTTP client: {e}")))?;
        Self::with_http_client(config, client)
    }

    /// Build a client around an existing `reqwest` client.
    pub fn with_http_client(config: GeminiConfig, client: Client) -> Result<Self, QanoonError> {
        let api_key = config
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| QanoonError::Auth(format!("{API_KEY_VAR} is not set")))?;

        Ok(GeminiClient {
            client,
            api_key,
            model: config.model,
            base_url: config.base_url,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl ReportService for GeminiClient {
    fn generate_report(&self, prompt: &str) -> Result<String, QanoonError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::info!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .map_err(|e| QanoonError::UnknownService(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| QanoonError::UnknownService(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "generateContent request failed");
            return Err(error_from_body(status.as_u16(), &body));
        }

        let completion = parse_completion(&body)?;
        tracing::info!(
            completion_chars = completion.chars().count(),
            "completion received"
        );
        Ok(completion)
    }

    fn backend_name(&self) -> &str {
        "gemini"
    }
}

fn parse_completion(body: &str) -> Result<String, QanoonError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| QanoonError::UnknownService(format!("invalid response: {e}")))?;

    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(QanoonError::ContentPolicy(format!("prompt blocked ({reason})")));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| QanoonError::UnknownService("no candidates in response".into()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".into());
        if BLOCKING_FINISH_REASONS.contains(&reason.as_str()) {
            return Err(QanoonError::ContentPolicy(format!("response blocked ({reason})")));
        }
        return Err(QanoonError::UnknownService(format!(
            "empty completion (finish reason {reason})"
        )));
    }

    Ok(text)
}

fn error_from_body(status: u16, body: &str) -> QanoonError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => classify_failure(
            Some(status),
            envelope.error.status.as_deref(),
            &envelope.error.message,
        ),
        Err(_) => classify_failure(Some(status), None, body),
    }
}
