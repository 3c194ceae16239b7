//! MBTA client error types.

/// Errors from fetching routes or stops upstream.
///
/// Any of these aborts a graph build; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum MbtaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded into routes or stops
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by MBTA API")]
    RateLimited,

    /// Invalid API key
    #[error("unauthorized: check MBTA_API_KEY")]
    Unauthorized,

    /// Offline snapshot could not be loaded
    #[error("snapshot error: {message}")]
    Snapshot { message: String },
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_ref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
