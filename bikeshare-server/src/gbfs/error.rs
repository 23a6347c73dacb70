//! GBFS gateway error types.

/// Errors that can occur when fetching or interpreting a GBFS feed.
///
/// Every variant means the current request is lost: there are no retries
/// and no partial results. The web layer maps all of these to a 500.
#[derive(Debug, thiserror::Error)]
pub enum GbfsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status code
    #[error("feed request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response parsed but did not have the expected GBFS shape
    #[error("unexpected feed shape: {message}")]
    Shape { message: String },
}

impl GbfsError {
    /// Shape error for a feed name absent from the discovery document.
    pub fn missing_feed(name: &str) -> Self {
        GbfsError::Shape {
            message: format!("feed {name:?} not listed in discovery document"),
        }
    }
}
