//! Outcome of one attempt to read a file from the remote host

use serde::{Deserialize, Serialize};

/// Exactly one case is produced per fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum FetchResult {
    /// The file exists; `content` is already decoded to text.
    Found {
        content: String,
        /// Blob id reported by the host, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sha: Option<String>,
    },
    /// The host answered 404 for this path and ref.
    NotFound,
    /// Any other non-success status, with a bounded prefix of the body.
    ApiError { status: u16, body_snippet: String },
    /// DNS, TLS, connect, timeout or body-read failure.
    TransportError { message: String },
}

impl FetchResult {
    #[must_use]
    pub fn found(content: impl Into<String>) -> Self {
        Self::Found {
            content: content.into(),
            sha: None,
        }
    }
}
