#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Verification core for ghverify
//!
//! `compare` holds the pure content comparison, `orchestrator` sequences the
//! fetch and the comparison into a single verdict.

pub mod compare;
pub mod orchestrator;

pub use compare::{compare, matches, normalize, Comparison};
pub use orchestrator::run_verification;
