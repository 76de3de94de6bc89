use serde::{Deserialize, Serialize};

use crate::{EventLevel, EventSource};

/// Numbered steps of a verification run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyStep {
    Fetch,
    Compare,
}

impl VerifyStep {
    /// 1-based position shown to the user.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Fetch => 1,
            Self::Compare => 2,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fetch => "Fetching file content",
            Self::Compare => "Verifying file content",
        }
    }
}

/// Which fetch failure ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchFailureKind {
    NotFound,
    Api,
    Transport,
}

/// Progress and outcome narration of one run. Observational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VerifyEvent {
    /// Loader picked up an input file
    InputLoaded { kind: String, path: String },

    /// Coordinates of the file about to be checked
    TargetResolved {
        organization: String,
        repository: String,
        branch: String,
        path: String,
    },

    StepStarted { step: VerifyStep },

    FileFetched {
        chars: usize,
        sha: Option<String>,
    },

    FetchFailed {
        kind: FetchFailureKind,
        message: String,
    },

    ContentMatched { expected: String },

    /// Full normalized values, never truncated
    ContentMismatch { expected: String, actual: String },

    Completed { passed: bool, duration_ms: u64 },
}

impl VerifyEvent {
    #[must_use]
    pub fn level(&self) -> EventLevel {
        match self {
            Self::InputLoaded { .. } | Self::StepStarted { .. } => EventLevel::Debug,
            Self::FetchFailed { .. } | Self::ContentMismatch { .. } => EventLevel::Warn,
            Self::TargetResolved { .. }
            | Self::FileFetched { .. }
            | Self::ContentMatched { .. }
            | Self::Completed { .. } => EventLevel::Info,
        }
    }

    #[must_use]
    pub fn source(&self) -> EventSource {
        match self {
            Self::InputLoaded { .. } => EventSource::Config,
            Self::FileFetched { .. } | Self::FetchFailed { .. } => EventSource::Fetch,
            _ => EventSource::Verify,
        }
    }
}
