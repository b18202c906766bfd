#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Coarse classification of a [`StorefrontError`], as seen by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-success status.
    Fetch,
    /// Response body did not match the expected shape.
    Decode,
    /// The request was valid but the product does not exist.
    NotFound,
    Other,
}

impl StorefrontError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorefrontError::Http(_) | StorefrontError::Status { .. } => ErrorKind::Fetch,
            StorefrontError::Json(_) => ErrorKind::Decode,
            StorefrontError::NotFound(_) => ErrorKind::NotFound,
            StorefrontError::InvalidArgument(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
