//! Expectation file loading and validation

use crate::constants::fields;
use ghverify_errors::{ConfigError, Error};
use ghverify_types::Expectation;
use serde::Deserialize;
use serde_yml::Value;
use std::path::Path;
use tokio::fs;

/// Expectation file as written, before validation
///
/// Every key is optional here so validation can report all missing keys at
/// once. Values stay as YAML scalars because `expected_content: 42` is a
/// number to YAML but text to us.
#[derive(Debug, Default, Deserialize)]
pub struct RawExpectation {
    #[serde(default)]
    pub target_repo: Option<Value>,
    #[serde(default)]
    pub target_branch: Option<Value>,
    #[serde(default)]
    pub answer_file_path: Option<Value>,
    #[serde(default)]
    pub expected_content: Option<Value>,
}

impl RawExpectation {
    /// Check that every field is present and usable.
    ///
    /// Coordinates must hold more than whitespace. `expected_content` only
    /// has to be non-empty: a whitespace-only value normalizes to the empty
    /// string and matches an empty file.
    ///
    /// # Errors
    ///
    /// `MissingFields` listing every absent or empty key in file order, or
    /// `InvalidValue` when a key holds a list or mapping, or when the file
    /// path has a `.` or `..` segment.
    pub fn validate(self, source_name: &str) -> Result<Expectation, ConfigError> {
        let mut missing = Vec::new();
        let mut take = |field: &str,
                        value: Option<Value>,
                        whitespace_ok: bool|
         -> Result<String, ConfigError> {
            match scalar_text(field, value)? {
                Some(text) if whitespace_ok && !text.is_empty() => Ok(text),
                Some(text) if !text.trim().is_empty() => Ok(text),
                _ => {
                    missing.push(field.to_string());
                    Ok(String::new())
                }
            }
        };

        let repository = take(fields::TARGET_REPO, self.target_repo, false)?;
        let branch = take(fields::TARGET_BRANCH, self.target_branch, false)?;
        let path = take(fields::ANSWER_FILE_PATH, self.answer_file_path, false)?;
        let expected_content = take(fields::EXPECTED_CONTENT, self.expected_content, true)?;

        if !missing.is_empty() {
            return Err(ConfigError::MissingFields {
                source_name: source_name.to_string(),
                fields: missing,
            });
        }

        // URL building would collapse these and fetch a different file.
        if path.split('/').any(|segment| segment == "." || segment == "..") {
            return Err(ConfigError::InvalidValue {
                field: fields::ANSWER_FILE_PATH.to_string(),
                value: path,
            });
        }

        Ok(Expectation::new(repository, branch, path, expected_content))
    }
}

fn scalar_text(field: &str, value: Option<Value>) -> Result<Option<String>, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: format!("{other:?}"),
        }),
    }
}

/// Parse and validate expectation file contents.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, is not a mapping, or misses
/// required fields.
pub fn parse_expectation(contents: &str, source_name: &str) -> Result<Expectation, Error> {
    let raw = if contents.trim().is_empty() {
        RawExpectation::default()
    } else {
        serde_yml::from_str::<RawExpectation>(contents).map_err(|e| ConfigError::ParseError {
            path: source_name.to_string(),
            message: e.to_string(),
        })?
    };

    raw.validate(source_name).map_err(Into::into)
}

/// Load the expectation file from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or see [`parse_expectation`].
pub async fn load_expectation(path: &Path) -> Result<Expectation, Error> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.display().to_string(),
            }
            .into()
        } else {
            Error::io_with_path(&e, path)
        }
    })?;

    parse_expectation(&contents, &path.display().to_string())
}
