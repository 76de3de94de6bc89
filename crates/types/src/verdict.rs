//! Terminal outcome of a verification run

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a run failed. Each fetch failure keeps its own case so operators can
/// tell a missing file from a host error from a network failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    NotFound { path: String, branch: String },
    Api { status: u16, body_snippet: String },
    Transport { message: String },
    /// Both sides are normalized and never truncated.
    Mismatch { expected: String, actual: String },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path, branch } => {
                write!(f, "file {path} does not exist on branch {branch}")
            }
            Self::Api {
                status,
                body_snippet,
            } => write!(f, "API error ({status}): {body_snippet}"),
            Self::Transport { message } => write!(f, "request failed: {message}"),
            Self::Mismatch { expected, actual } => {
                write!(f, "content mismatch:\nexpected: {expected}\nactual:   {actual}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail { reason: FailureReason },
}

impl Verdict {
    #[must_use]
    pub fn fail(reason: FailureReason) -> Self {
        Self::Fail { reason }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Process exit status: `0` on pass, `1` on any failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_pass() {
            0
        } else {
            1
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            Self::Pass => None,
            Self::Fail { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_follows_the_verdict() {
        assert_eq!(Verdict::Pass.exit_code(), 0);
        assert_eq!(
            Verdict::fail(FailureReason::Transport {
                message: "dns".to_string()
            })
            .exit_code(),
            1
        );
    }

    #[test]
    fn verdict_serializes_with_an_outcome_tag() {
        let verdict = Verdict::fail(FailureReason::NotFound {
            path: "ANSWER.md".to_string(),
            branch: "main".to_string(),
        });
        let json = serde_json::to_value(&verdict).unwrap();

        assert_eq!(json["outcome"], "fail");
        assert_eq!(json["reason"]["kind"], "not_found");
        assert_eq!(json["reason"]["path"], "ANSWER.md");
    }

    #[test]
    fn mismatch_display_shows_both_sides() {
        let reason = FailureReason::Mismatch {
            expected: "hello".to_string(),
            actual: "goodbye".to_string(),
        };
        let rendered = reason.to_string();

        assert!(rendered.contains("expected: hello"));
        assert!(rendered.contains("actual:   goodbye"));
    }
}
