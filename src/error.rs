//! Error types for endpoint resolution and response decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors during path-to-schema resolution.
///
/// Both variants are terminal for the call; nothing is retried or defaulted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("malformed path '{path}': expected the API namespace prefix (e.g. wp-json/wc/v3)")]
    MalformedPath { path: String },

    #[error("no known endpoint matches '{path}'")]
    UnresolvedEndpoint { path: String },
}

impl ResolveError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors during response decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    // Validation errors (exit code 1)
    #[error("expected a JSON {expected} for {schema}, got {actual}")]
    Shape {
        schema: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid {schema} at {path}: {message}")]
    Validation {
        schema: &'static str,
        /// JSON Pointer-ish location; for collections this carries the
        /// element index (e.g. "/3").
        path: String,
        message: String,
    },
}

impl DecodeError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DecodeError::FileNotFound { .. } | DecodeError::ReadError { .. } => 3,
            DecodeError::Resolve(e) => e.exit_code(),
            DecodeError::InvalidJson { .. } => 2,
            DecodeError::Shape { .. } | DecodeError::Validation { .. } => 1,
        }
    }
}

/// Errors from the HTTP client (feature `remote`).
#[cfg(feature = "remote")]
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}; refusing to decode the body")]
    Status { url: String, status: u16 },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(feature = "remote")]
impl ClientError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::Network { .. } | ClientError::Status { .. } => 3,
            ClientError::Decode(e) => e.exit_code(),
        }
    }
}

#[cfg(feature = "remote")]
impl From<ResolveError> for ClientError {
    fn from(e: ResolveError) -> Self {
        ClientError::Decode(DecodeError::Resolve(e))
    }
}
