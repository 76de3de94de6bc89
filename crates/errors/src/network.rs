//! Network-related error types
//!
//! These cover setting up a request. Failures of the request itself are
//! reported as a `FetchResult`, not as an error.

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid header value for {header}")]
    InvalidHeader { header: String },
}

impl UserFacingError for NetworkError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidUrl(_) => Some("Check --api-url; it must be an absolute http(s) URL."),
            Self::InvalidHeader { .. } => {
                Some("A fixed request header is malformed; this is a bug in ghverify.")
            }
            Self::ClientBuild(_) => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::ClientBuild(_) => "network.client_build",
            Self::InvalidUrl(_) => "network.invalid_url",
            Self::InvalidHeader { .. } => "network.invalid_header",
        })
    }
}
