use crate::gemini::GeminiClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Requests are stateless; the only shared value is the upstream
/// client (and its connection pool).
#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
}
