//! Report type for a finished run

use crate::Verdict;
use serde::{Deserialize, Serialize};

/// Verification report
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationReport {
    /// `org/repo@branch:path`
    pub target: String,
    /// Final outcome
    pub verdict: Verdict,
    /// Size of the fetched file in characters, when it was fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_chars: Option<usize>,
    /// Blob id reported by the host, when it was fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Total execution time
    pub duration_ms: u64,
}

impl VerificationReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.verdict.is_pass()
    }
}
