use thiserror::Error;

/// Error types for Telegram API operations
#[derive(Error, Debug)]
pub enum Error {
    /// A request was assembled with missing or conflicting values.
    /// Raised before anything is sent over the network.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote API returned no envelope or an envelope with `ok: false`
    #[error("Telegram API error: {}", description.as_deref().unwrap_or("no response"))]
    RemoteApi {
        /// Human readable description supplied by the server
        description: Option<String>,
        /// Numeric error code supplied by the server
        error_code: Option<i32>,
    },

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body or request payload could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error (invalid client settings)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument<S: AsRef<str>>(message: S) -> Self {
        Error::InvalidArgument(message.as_ref().to_string())
    }

    /// Create an error for a required builder field that was never set
    pub fn required(field: &str) -> Self {
        Error::InvalidArgument(format!("{} value is required", field))
    }

    /// Create a new remote API error
    pub fn remote_api(description: Option<String>, error_code: Option<i32>) -> Self {
        Error::RemoteApi {
            description,
            error_code,
        }
    }

    /// Create a new configuration error
    pub fn configuration<S: AsRef<str>>(message: S) -> Self {
        Error::Configuration(message.as_ref().to_string())
    }

    /// Whether this error was raised locally by request validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Whether this error was reported by (or in place of) the remote API
    pub fn is_remote_api(&self) -> bool {
        matches!(self, Error::RemoteApi { .. })
    }

    /// The remote description, if this is a remote API error carrying one
    pub fn description(&self) -> Option<&str> {
        match self {
            Error::RemoteApi { description, .. } => description.as_deref(),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
