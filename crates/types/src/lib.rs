#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for ghverify
//!
//! The loaded inputs (`Credential`, `Expectation`), the tagged outcome of one
//! fetch (`FetchResult`) and the terminal `Verdict` all live here so the
//! fetcher, the orchestrator and the CLI agree on one vocabulary.

pub mod fetch;
pub mod reports;
pub mod target;
pub mod verdict;

pub use fetch::FetchResult;
pub use reports::VerificationReport;
pub use target::{Credential, Expectation};
pub use verdict::{FailureReason, Verdict};

use serde::{Deserialize, Serialize};

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Always,
    #[default]
    Auto,
    Never,
}

impl clap::ValueEnum for ColorChoice {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Always, Self::Auto, Self::Never]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Always => clap::builder::PossibleValue::new("always"),
            Self::Auto => clap::builder::PossibleValue::new("auto"),
            Self::Never => clap::builder::PossibleValue::new("never"),
        })
    }
}
