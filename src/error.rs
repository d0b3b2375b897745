//! flickr-tag error types

/// flickr-tag error types
#[derive(Debug, thiserror::Error)]
pub enum FlickrError {
    // Transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The cached record for `id` has no variant for `label`.
    ///
    /// Only returned under [`MissingSizePolicy::Error`](crate::MissingSizePolicy::Error).
    #[error("size '{label}' not available for photo {id}")]
    SizeNotFound { id: String, label: String },

    // Configuration errors
    #[error("no Flickr API key configured (set flickr.api_key or FLICKR_API_KEY)")]
    MissingApiKey,

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl FlickrError {
    /// Whether this error came from the network layer rather than from the
    /// photo data or the site configuration.
    ///
    /// Transient errors degrade a single request to its fallback value; they
    /// never fail a render.
    pub fn is_transient(&self) -> bool {
        match self {
            FlickrError::Http(_) | FlickrError::Timeout(_) => true,
            FlickrError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for FlickrError {
    /// The request URL is dropped: its query string carries the API key.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        match err.status() {
            Some(status) => FlickrError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => FlickrError::Http(err.to_string()),
        }
    }
}

/// Result type alias for flickr-tag operations
pub type Result<T> = std::result::Result<T, FlickrError>;
