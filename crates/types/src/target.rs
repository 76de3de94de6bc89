//! Loaded inputs of a verification run

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static bearer credential plus the organization that owns the repository
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_token: String,
    organization: String,
}

impl Credential {
    #[must_use]
    pub fn new(access_token: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            organization: organization.into(),
        }
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }
}

// The token never reaches logs through `{:?}`.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("organization", &self.organization)
            .finish()
    }
}

/// Which file, on which branch of which repository, should hold which text
///
/// All four fields are non-empty; the loader rejects anything else before a
/// value of this type is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    pub repository: String,
    pub branch: String,
    pub path: String,
    pub expected_content: String,
}

impl Expectation {
    #[must_use]
    pub fn new(
        repository: impl Into<String>,
        branch: impl Into<String>,
        path: impl Into<String>,
        expected_content: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            branch: branch.into(),
            path: path.into(),
            expected_content: expected_content.into(),
        }
    }

    /// `org/repo@branch:path`, used in banners and reports
    #[must_use]
    pub fn display_target(&self, organization: &str) -> String {
        format!(
            "{organization}/{}@{}:{}",
            self.repository, self.branch, self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_debug_hides_the_token() {
        let credential = Credential::new("ghp_secret", "acme");
        let rendered = format!("{credential:?}");

        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("acme"));
    }

    #[test]
    fn display_target_names_every_coordinate() {
        let expectation = Expectation::new("missing-semester", "main", "ANSWER.md", "42");
        assert_eq!(
            expectation.display_target("acme"),
            "acme/missing-semester@main:ANSWER.md"
        );
    }
}
