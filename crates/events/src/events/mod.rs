use serde::{Deserialize, Serialize};

use crate::{EventLevel, EventSource};

pub mod general;
pub mod verify;

pub use general::*;
pub use verify::*;

/// Top-level application event enum that aggregates all domain-specific events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum AppEvent {
    /// Diagnostics not tied to a step
    General(GeneralEvent),

    /// Progress and outcome of a verification run
    Verify(VerifyEvent),
}

impl AppEvent {
    /// Severity this event is logged at.
    #[must_use]
    pub fn level(&self) -> EventLevel {
        match self {
            Self::General(GeneralEvent::DebugLog { .. }) => EventLevel::Debug,
            Self::Verify(event) => event.level(),
        }
    }

    /// Component that emitted this event.
    #[must_use]
    pub fn source(&self) -> EventSource {
        match self {
            Self::General(_) => EventSource::General,
            Self::Verify(event) => event.source(),
        }
    }
}
