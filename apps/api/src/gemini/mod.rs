/// Gemini client — the single point of entry for all generative-language API
/// calls in TextTune.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All upstream interactions MUST go through this module.
///
/// Model: gemini-2.0-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API. Carries the upstream-reported message
    /// when parseable, otherwise a generic status-based fallback.
    #[error("{0}")]
    Api(String),

    #[error("No content found in AI response.")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    /// Hard limit on tokens, not words. Word-count guidance travels in the
    /// prompt text; this only keeps the model from running away.
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the first candidate's text, surrounding whitespace trimmed.
    /// Absence of any candidate, content, or part is a hard failure, not an
    /// empty string.
    fn into_text(self) -> Result<String, GeminiError> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .map(|t| t.trim().to_string())
            .ok_or(GeminiError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Picks the upstream-reported message out of an error body, falling back to
/// a generic status-based message when the body is not the expected envelope.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<GeminiErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| format!("AI service error (status {status})"))
}

/// The single upstream client used by both endpoint handlers.
/// Wraps the Gemini generateContent API; one attempt per call, no retries,
/// no streaming, transport-default timeout.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Sends one generateContent call and returns the first candidate's text.
    pub async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String, GeminiError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens,
            },
        };

        let response = self
            .client
            .post(GEMINI_API_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            warn!("Gemini API returned {status}: {message}");
            return Err(GeminiError::Api(message));
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.into_text()?;

        debug!("Gemini call succeeded: {} chars returned", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn extracts_first_candidate_text_trimmed() {
        let response =
            parse(r#"{"candidates":[{"content":{"parts":[{"text":"  hello world \n"}]}}]}"#);
        assert_eq!(response.into_text().unwrap(), "hello world");
    }

    #[test]
    fn second_candidate_is_ignored() {
        let response = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"first"}]}},
                {"content":{"parts":[{"text":"second"}]}}
            ]}"#,
        );
        assert_eq!(response.into_text().unwrap(), "first");
    }

    #[test]
    fn empty_candidates_is_a_hard_failure() {
        let response = parse(r#"{"candidates":[]}"#);
        assert!(matches!(
            response.into_text(),
            Err(GeminiError::EmptyResponse)
        ));
    }

    #[test]
    fn missing_candidates_field_is_a_hard_failure() {
        let response = parse("{}");
        assert!(matches!(
            response.into_text(),
            Err(GeminiError::EmptyResponse)
        ));
    }

    #[test]
    fn candidate_without_parts_is_a_hard_failure() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[]}}]}"#);
        assert!(matches!(
            response.into_text(),
            Err(GeminiError::EmptyResponse)
        ));
    }

    #[test]
    fn empty_response_error_has_literal_message() {
        assert_eq!(
            GeminiError::EmptyResponse.to_string(),
            "No content found in AI response."
        );
    }

    #[test]
    fn error_message_prefers_upstream_report() {
        let body = r#"{"error":{"message":"API key not valid. Please pass a valid API key."}}"#;
        assert_eq!(
            error_message(reqwest::StatusCode::BAD_REQUEST, body),
            "API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        let message = error_message(reqwest::StatusCode::BAD_GATEWAY, "not json");
        assert!(message.contains("502"));
    }

    #[test]
    fn api_error_displays_message_only() {
        let err = GeminiError::Api("Quota exceeded".to_string());
        assert_eq!(err.to_string(), "Quota exceeded");
    }
}
