#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for ghverify
//!
//! This crate turns the two inputs of a run into typed values:
//! - the credential, from an env file with process-environment fallback
//! - the expectation, from a YAML file
//!
//! It also owns the fixed request policy. Everything here runs before the
//! verification pipeline starts, so its errors are fatal.

pub mod constants;
mod credential;
mod expectation;
mod policy;

pub use credential::{load_credential, load_credential_with};
pub use expectation::{load_expectation, parse_expectation, RawExpectation};
pub use policy::ApiPolicy;

use ghverify_errors::Error;
use ghverify_types::{Credential, Expectation};
use std::path::{Path, PathBuf};

/// Where the two input files live
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub env_file: PathBuf,
    pub config_file: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(constants::DEFAULT_ENV_FILE),
            config_file: PathBuf::from(constants::DEFAULT_CONFIG_FILE),
        }
    }
}

impl InputPaths {
    /// Use the given paths, falling back to the defaults for `None`.
    #[must_use]
    pub fn resolve(env_file: Option<&Path>, config_file: Option<&Path>) -> Self {
        let defaults = Self::default();
        Self {
            env_file: env_file.map_or(defaults.env_file, Path::to_path_buf),
            config_file: config_file.map_or(defaults.config_file, Path::to_path_buf),
        }
    }
}

/// Both loaded inputs of a run
#[derive(Debug, Clone)]
pub struct Inputs {
    pub credential: Credential,
    pub expectation: Expectation,
}

impl Inputs {
    /// Load the credential first, then the expectation; stop at the first
    /// failing file.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error encountered.
    pub async fn load(paths: &InputPaths) -> Result<Self, Error> {
        let credential = load_credential(&paths.env_file)?;
        let expectation = load_expectation(&paths.config_file).await?;
        Ok(Self {
            credential,
            expectation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_paths_default_to_the_working_directory() {
        let paths = InputPaths::resolve(None, Some(Path::new("/etc/ghverify/check.yaml")));

        assert_eq!(paths.env_file, PathBuf::from(".env"));
        assert_eq!(paths.config_file, PathBuf::from("/etc/ghverify/check.yaml"));
    }
}
