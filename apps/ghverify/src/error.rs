//! CLI error handling

use std::fmt;

use ghverify_errors::UserFacingError;

/// CLI-specific error type
///
/// Only setup can fail this way. A failed verification is a verdict, not an
/// error.
#[derive(Debug)]
pub enum CliError {
    /// Credential or expectation could not be loaded
    Config(ghverify_errors::Error),
    /// HTTP client could not be set up
    Setup(ghverify_errors::Error),
    /// Writing the report failed
    Io(std::io::Error),
}

fn write_user_facing(f: &mut fmt::Formatter<'_>, e: &ghverify_errors::Error) -> fmt::Result {
    write!(f, "{}", e.user_message())?;
    if let Some(code) = e.user_code() {
        write!(f, "\n  Code: {code}")?;
    }
    if let Some(hint) = e.user_hint() {
        write!(f, "\n  Hint: {hint}")?;
    }
    Ok(())
}

impl CliError {
    /// Machine-readable form printed in `--json` mode
    pub fn to_json(&self) -> serde_json::Value {
        let (message, code, hint) = match self {
            CliError::Config(e) | CliError::Setup(e) => {
                (e.user_message().into_owned(), e.user_code(), e.user_hint())
            }
            CliError::Io(e) => (e.to_string(), Some("error.io"), None),
        };
        serde_json::json!({
            "error": message,
            "code": code,
            "hint": hint,
        })
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => {
                write!(f, "Configuration error: ")?;
                write_user_facing(f, e)
            }
            CliError::Setup(e) => {
                write!(f, "Setup error: ")?;
                write_user_facing(f, e)
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) | CliError::Setup(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
