//! Content comparison
//!
//! Normalization is a trim of leading and trailing whitespace on both sides.
//! Case, internal whitespace and line endings are compared as-is.

use ghverify_types::{FailureReason, Verdict};

#[must_use]
pub fn normalize(text: &str) -> &str {
    text.trim()
}

/// Whether `actual` equals `expected` after normalization.
#[must_use]
pub fn matches(actual: &str, expected: &str) -> bool {
    normalize(actual) == normalize(expected)
}

/// Normalized sides of one comparison, kept whole for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub expected: String,
    pub actual: String,
    pub matched: bool,
}

impl Comparison {
    #[must_use]
    pub fn into_verdict(self) -> Verdict {
        if self.matched {
            Verdict::Pass
        } else {
            Verdict::fail(FailureReason::Mismatch {
                expected: self.expected,
                actual: self.actual,
            })
        }
    }
}

#[must_use]
pub fn compare(actual: &str, expected: &str) -> Comparison {
    let actual = normalize(actual);
    let expected = normalize(expected);
    Comparison {
        matched: actual == expected,
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}
