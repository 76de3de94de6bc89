#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for ghverify
//!
//! Errors are split by domain. Only configuration loading and client setup
//! can fail with an `Error`; verification outcomes (missing file, API error,
//! transport failure, mismatch) are ordinary values in `ghverify-types`.

use std::borrow::Cow;

use thiserror::Error;

pub mod config;
pub mod network;

pub use config::ConfigError;
pub use network::NetworkError;

/// Error returned across crate boundaries
///
/// Setup failures only. Every variant stops the run before the network is
/// touched, or before the first request when the client cannot be built.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("I/O error{}: {message}", .path.as_deref().map(|p| format!(" on {p}")).unwrap_or_default())]
    Io {
        kind: std::io::ErrorKind,
        message: String,
        path: Option<String>,
    },
}

impl Error {
    /// I/O failure on a known file
    pub fn io_with_path(err: &std::io::Error, path: impl AsRef<std::path::Path>) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
            path: Some(path.as_ref().display().to_string()),
        }
    }
}

/// How an error is shown to the person running the tool
pub trait UserFacingError {
    /// One-line description for the terminal.
    fn user_message(&self) -> Cow<'_, str>;

    /// What to change before running again.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Dotted code such as `config.missing_fields`.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Network(err) => err.user_message(),
            Self::Io { .. } => Cow::Owned(self.to_string()),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::Config(err) => err.user_hint(),
            Self::Network(err) => err.user_hint(),
            Self::Io { .. } => Some("Check that the file is readable by the current user."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::Config(err) => err.user_code(),
            Self::Network(err) => err.user_code(),
            Self::Io { .. } => Some("error.io"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_keep_their_hint_through_the_generic_error() {
        let err: Error = ConfigError::MissingFields {
            source_name: "answer_config.yaml".to_string(),
            fields: vec!["target_repo".to_string()],
        }
        .into();

        assert_eq!(err.user_code(), Some("config.missing_fields"));
        assert!(err.user_hint().is_some());
        assert!(err.user_message().contains("target_repo"));
    }

    #[test]
    fn io_errors_carry_the_path_they_came_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io_with_path(&io, "/tmp/answer_config.yaml");

        match err {
            Error::Io { kind, path, .. } => {
                assert_eq!(kind, std::io::ErrorKind::NotFound);
                assert_eq!(path.as_deref(), Some("/tmp/answer_config.yaml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
