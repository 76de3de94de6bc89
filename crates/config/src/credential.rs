//! Credential loading from an env file with process-environment fallback

use crate::constants::{ORG_VAR, TOKEN_VAR};
use ghverify_errors::{ConfigError, Error};
use ghverify_types::Credential;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Load the credential from `env_file`, falling back to the process
/// environment for any variable the file does not set.
///
/// The process environment is never modified.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed, or if either
/// variable is missing or blank in both places.
pub fn load_credential(env_file: &Path) -> Result<Credential, Error> {
    load_credential_with(env_file, |key| std::env::var(key).ok())
}

/// Same as [`load_credential`] with an injectable fallback lookup.
///
/// # Errors
///
/// See [`load_credential`].
pub fn load_credential_with<F>(env_file: &Path, fallback: F) -> Result<Credential, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let file_exists = env_file.exists();
    let from_file = if file_exists {
        read_env_file(env_file)?
    } else {
        debug!(path = %env_file.display(), "env file not present, using process environment");
        HashMap::new()
    };

    let lookup = |key: &str| {
        from_file
            .get(key)
            .cloned()
            .or_else(|| fallback(key))
            .filter(|value| !value.trim().is_empty())
    };

    let token = lookup(TOKEN_VAR);
    let organization = lookup(ORG_VAR);

    match (token, organization) {
        (Some(token), Some(organization)) => {
            // The token travels in the Authorization header.
            if token.chars().any(char::is_control) {
                return Err(ConfigError::InvalidValue {
                    field: TOKEN_VAR.to_string(),
                    value: "<contains control characters>".to_string(),
                }
                .into());
            }
            Ok(Credential::new(token, organization))
        }
        (token, organization) => {
            if !file_exists {
                // With no file and half the pair exported, the shell is the
                // intended source.
                return Err(match (token, organization) {
                    (Some(_), None) => ConfigError::EnvVarNotFound {
                        var: ORG_VAR.to_string(),
                    },
                    (None, Some(_)) => ConfigError::EnvVarNotFound {
                        var: TOKEN_VAR.to_string(),
                    },
                    _ => ConfigError::NotFound {
                        path: env_file.display().to_string(),
                    },
                }
                .into());
            }
            let mut fields = Vec::new();
            if token.is_none() {
                fields.push(TOKEN_VAR.to_string());
            }
            if organization.is_none() {
                fields.push(ORG_VAR.to_string());
            }
            Err(ConfigError::MissingFields {
                source_name: env_file.display().to_string(),
                fields,
            }
            .into())
        }
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, Error> {
    let parse_error = |e: dotenvy::Error| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(parse_error)? {
        let (key, value) = item.map_err(parse_error)?;
        vars.insert(key, value);
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn reads_both_variables_from_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "# eval credentials\nMCP_GITHUB_TOKEN=ghp_abc\nGITHUB_EVAL_ORG=\"acme\"\n",
        )
        .unwrap();

        let credential = load_credential_with(&path, no_env).unwrap();
        assert_eq!(credential.access_token(), "ghp_abc");
        assert_eq!(credential.organization(), "acme");
    }

    #[test]
    fn file_values_win_over_the_process_environment() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "GITHUB_EVAL_ORG=from-file\n").unwrap();

        let credential = load_credential_with(&path, |key| match key {
            "MCP_GITHUB_TOKEN" => Some("ghp_env".to_string()),
            "GITHUB_EVAL_ORG" => Some("from-env".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(credential.access_token(), "ghp_env");
        assert_eq!(credential.organization(), "from-file");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "MCP_GITHUB_TOKEN=\nGITHUB_EVAL_ORG=acme\n").unwrap();

        let err = load_credential_with(&path, no_env).unwrap_err();
        match err {
            Error::Config(ConfigError::MissingFields { fields, .. }) => {
                assert_eq!(fields, vec!["MCP_GITHUB_TOKEN".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_fine_when_the_environment_has_everything() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.env");

        let credential = load_credential_with(&path, |key| Some(format!("value-of-{key}"))).unwrap();
        assert_eq!(credential.organization(), "value-of-GITHUB_EVAL_ORG");
    }

    #[test]
    fn missing_file_without_environment_reports_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.env");

        let err = load_credential_with(&path, no_env).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn missing_file_with_half_the_pair_exported_names_the_variable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.env");

        let err = load_credential_with(&path, |key| {
            (key == "MCP_GITHUB_TOKEN").then(|| "ghp_shell".to_string())
        })
        .unwrap_err();
        match err {
            Error::Config(ConfigError::EnvVarNotFound { var }) => {
                assert_eq!(var, "GITHUB_EVAL_ORG");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn token_with_control_characters_is_rejected_without_echoing_it() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "MCP_GITHUB_TOKEN=\"ghp_\\nsecret\"\nGITHUB_EVAL_ORG=acme\n").unwrap();

        let err = load_credential_with(&path, no_env).unwrap_err();
        match err {
            Error::Config(ConfigError::InvalidValue { field, value }) => {
                assert_eq!(field, "MCP_GITHUB_TOKEN");
                assert!(!value.contains("secret"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
