//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("{source_name} is missing required fields: {}", fields.join(", "))]
    MissingFields {
        source_name: String,
        fields: Vec<String>,
    },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Create the file or point to it with --env-file / --config.")
            }
            Self::ParseError { .. } => Some("Fix the syntax of the file and retry."),
            Self::MissingFields { .. } => {
                Some("Add every field listed above with a non-empty value.")
            }
            Self::EnvVarNotFound { .. } => {
                Some("Set the variable in the env file or export it in the shell.")
            }
            Self::InvalidValue { .. } => Some("Fix the value and retry."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::NotFound { .. } => "config.not_found",
            Self::ParseError { .. } => "config.parse",
            Self::MissingFields { .. } => "config.missing_fields",
            Self::EnvVarNotFound { .. } => "config.env_var_not_found",
            Self::InvalidValue { .. } => "config.invalid_value",
        })
    }
}
