//! Error types for the Google Scholar stats fetcher.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from fetching the profile page.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// HTTP transport error (connection, DNS, TLS, body read, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The profile URL could not be built
    #[error("Invalid profile URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-2xx response from Scholar
    #[error("HTTP status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Start of the response body
        message: String,
    },
}

impl FetchError {
    /// Longest body excerpt kept in a status error.
    const MAX_MESSAGE_LEN: usize = 200;

    /// Create a status error, keeping only the start of the body.
    #[must_use]
    pub fn status(status: u16, body: &str) -> Self {
        let message = body.trim().chars().take(Self::MAX_MESSAGE_LEN).collect();
        Self::Status { status, message }
    }

    /// HTTP status code, if the server answered.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }
}

/// Errors from extracting statistics out of the profile markup.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// A CSS selector failed to compile
    #[error("Invalid selector '{selector}': {message}")]
    Selector {
        /// Selector source text
        selector: String,
        /// Parser message
        message: String,
    },
}

impl ExtractError {
    /// Create a selector error.
    #[must_use]
    pub fn selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Selector { selector: selector.into(), message: message.into() }
    }
}

/// Errors from writing or reading the YAML record.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type alias for extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
