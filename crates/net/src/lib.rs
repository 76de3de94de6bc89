#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Network operations for ghverify
//!
//! One authenticated GET against the repository contents endpoint per
//! verification. Transport problems, error statuses and missing files all
//! come back as `FetchResult` cases rather than errors.

mod client;
mod contents;

pub use client::{NetClient, NetConfig};
pub use contents::{decode_base64_text, truncate_chars, ContentFetcher, ContentsClient};

use ghverify_events::EventEmitter;
use ghverify_types::{Credential, FetchResult};
use std::collections::BTreeMap;

/// Fetch one file's content, narrating the request as a debug event
pub async fn fetch_file_contents<F, E>(
    fetcher: &F,
    path: &str,
    credential: &Credential,
    organization: &str,
    repository: &str,
    branch: &str,
    tx: &E,
) -> FetchResult
where
    F: ContentFetcher + ?Sized,
    E: EventEmitter + ?Sized,
{
    let context = BTreeMap::from([
        ("organization".to_string(), organization.to_string()),
        ("repository".to_string(), repository.to_string()),
        ("branch".to_string(), branch.to_string()),
        ("path".to_string(), path.to_string()),
    ]);
    tx.emit_debug_with_context(format!("Fetching {path} from {organization}/{repository}"), context);

    fetcher
        .fetch(path, credential, organization, repository, branch)
        .await
}
