//! Axum route handlers for the rewrite and generate endpoints.
//!
//! Each request runs the same pipeline: required-input check, word-limit
//! validation, tone parsing, prompt composition, one upstream call. All
//! values are request-scoped and immutable after construction.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::transform::prompts::{compose, Mode};
use crate::transform::tone::{Tone, UnsupportedTone};
use crate::transform::validation::check_word_limits;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub word_limit: Option<u32>,
    #[serde(default)]
    pub min_word_limit: Option<u32>,
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResponse {
    pub rewritten_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub word_limit: Option<u32>,
    #[serde(default)]
    pub min_word_limit: Option<u32>,
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub generated_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/rewrite
///
/// Grammar-checks and rewrites the supplied text for clarity and accuracy
/// while preserving its meaning.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    let text = required_input(request.text, Mode::Rewrite)?;

    let rewritten_text = run_transform(
        &state,
        Mode::Rewrite,
        &text,
        request.word_limit,
        request.min_word_limit,
        request.tone,
    )
    .await?;

    Ok(Json(RewriteResponse { rewritten_text }))
}

/// POST /api/generate
///
/// Generates a creative, helpful message fulfilling the supplied request.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = required_input(request.prompt, Mode::Generate)?;

    let generated_text = run_transform(
        &state,
        Mode::Generate,
        &prompt,
        request.word_limit,
        request.min_word_limit,
        request.tone,
    )
    .await?;

    Ok(Json(GenerateResponse { generated_text }))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Validate → compose → upstream call, shared by both handlers.
///
/// The word-limit check runs here even though the browser form performs the
/// same check before submitting; the server is the authority.
async fn run_transform(
    state: &AppState,
    mode: Mode,
    input: &str,
    word_limit: Option<u32>,
    min_word_limit: Option<u32>,
    tone: Option<String>,
) -> Result<String, AppError> {
    check_word_limits(word_limit, min_word_limit)?;
    let tone = parse_tone(tone)?;

    let prompt = compose(mode, input, min_word_limit, word_limit, tone);
    debug!(?mode, "composed prompt ({} chars)", prompt.len());

    state
        .gemini
        .generate(&prompt, mode.temperature(), mode.max_output_tokens())
        .await
        .map_err(|e| AppError::Upstream(format!("{}{e}", mode.failure_prefix())))
}

fn required_input(value: Option<String>, mode: Mode) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(
            mode.missing_input_message().to_string(),
        )),
    }
}

fn parse_tone(tone: Option<String>) -> Result<Tone, AppError> {
    match tone {
        Some(t) => t
            .parse()
            .map_err(|e: UnsupportedTone| AppError::Validation(e.to_string())),
        None => Ok(Tone::Neutral),
    }
}
