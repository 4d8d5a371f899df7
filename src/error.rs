//! Error types for the Scryfall API client.
//!
//! Every fallible operation in this crate returns [`Error`]. The variants
//! fall into four classes: configuration, transport, decoding, and errors
//! reported by the API itself. Use the classification helpers to branch on
//! the class rather than matching individual variants.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized `Result` type for Scryfall operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Scryfall API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client setup or an unresolvable request target.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure or reqwest-level timeout
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request context was cancelled before a response arrived.
    #[error("Request cancelled")]
    Cancelled,

    /// The request context deadline passed before a response arrived.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// A 200 response body did not match the expected shape.
    #[error("Decoding error: {0}")]
    Decode(#[source] serde_json::Error),

    /// A non-200 response body could not be parsed as an API error.
    #[error("Malformed error body (status {status}): {source}")]
    MalformedErrorBody {
        /// HTTP status code of the response
        status: u16,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// The API reported a failure.
    #[error("API error: {0}")]
    Api(ApiError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` for invalid client setup or request targets.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns `true` for network failures, cancellation and deadline
    /// expiry. These are the only errors a caller may reasonably retry.
    ///
    /// # Example
    ///
    /// ```
    /// use scryfall_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_transport_error() {
    ///         println!("Transport failed, caller may retry");
    ///     }
    /// }
    /// ```
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Cancelled | Error::DeadlineExceeded
        )
    }

    /// Returns `true` when a response body did not match the expected
    /// success or error shape.
    pub fn is_decoding_error(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::MalformedErrorBody { .. })
    }

    /// Returns the structured error if the API reported one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the HTTP status of a non-200 response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::MalformedErrorBody { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the API answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// A failure reported by the Scryfall API.
///
/// Returned in [`Error::Api`] whenever a response carries a non-200 status
/// and a parseable error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Short machine-readable code, e.g. `not_found`
    pub code: String,
    /// Human-readable explanation
    pub details: String,
    /// Optional sub-type, e.g. `ambiguous`
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Non-fatal issues the API noticed while handling the request
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.details)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}
