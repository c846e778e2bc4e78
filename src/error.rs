// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with status-preserving API failures.

use reqwest::StatusCode;

/// Error type for all client operations.
///
/// Non-2xx responses keep the status code and raw body so callers can
/// branch on specific statuses (401/403/404/410 all carry meaning for
/// different screens).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The remote API answered with a non-success status.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape.
    #[error("Response decode error: {0}")]
    Decode(String),

    /// Local storage failure. Mostly swallowed and logged at call sites.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Outbound payload rejected before dispatch.
    #[error("Invalid request payload: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    /// HTTP status of the failed response, if this was an API error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the remote rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// True when the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
