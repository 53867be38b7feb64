//! Error types for the Bybit REST accessor
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Aggregation failures wrap the underlying cause together with the endpoint
//! path and the phase (fetch or decode) in which they happened.

use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API error {ret_code}: {ret_msg}")]
    Api { ret_code: i64, ret_msg: String },

    // ============================================================================
    // Aggregation Errors
    // ============================================================================
    #[error("Error fetching {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Error parsing response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Pagination of {path} exceeded {max_pages} pages")]
    PageLimitExceeded { path: String, max_pages: u32 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Phase of an aggregation in which a wrapped error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    /// The transport failed to deliver a page
    Fetch,
    /// A page did not match the expected shape
    Decode,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an API error from a non-zero `retCode` envelope
    pub fn api(ret_code: i64, ret_msg: impl Into<String>) -> Self {
        Self::Api {
            ret_code,
            ret_msg: ret_msg.into(),
        }
    }

    /// Wrap a transport failure for the given endpoint
    pub fn fetch(path: impl Into<String>, source: Error) -> Self {
        Self::Fetch {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a decode failure for the given endpoint
    pub fn decode(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Phase in which an aggregation error occurred, if this is one
    pub fn phase(&self) -> Option<ErrorPhase> {
        match self {
            Error::Fetch { .. } => Some(ErrorPhase::Fetch),
            Error::Decode { .. } => Some(ErrorPhase::Decode),
            _ => None,
        }
    }

    /// Endpoint path attached to an aggregation error
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Fetch { path, .. }
            | Error::Decode { path, .. }
            | Error::PageLimitExceeded { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Check if this error is retryable at the transport level
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            Error::Fetch { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
