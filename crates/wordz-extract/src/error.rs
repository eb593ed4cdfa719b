//! Errors raised while obtaining keywords for a document.

/// Everything that can go wrong between reading a document and holding a
/// parsed keyword list.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Please provide patent text before analyzing.")]
    EmptyDocument,

    #[error("unsupported document: {0}")]
    UnsupportedDocument(String),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("environment variable {0} is not set; it must hold the API key")]
    MissingApiKey(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("API response had no content")]
    MissingContent,

    #[error("Invalid response structure from the API.")]
    InvalidResponse(#[source] Option<serde_json::Error>),
}
