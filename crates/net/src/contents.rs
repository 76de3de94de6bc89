//! Single-file reads through the repository contents endpoint

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use ghverify_config::ApiPolicy;
use ghverify_errors::{Error, NetworkError};
use ghverify_types::{Credential, FetchResult};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::client::{describe_transport_error, NetClient, NetConfig};

/// Anything that can read one file of a repository
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Read `path` of `organization/repository` at `branch`.
    ///
    /// Never fails: every outcome, including transport failures, is a
    /// `FetchResult` case.
    async fn fetch(
        &self,
        path: &str,
        credential: &Credential,
        organization: &str,
        repository: &str,
        branch: &str,
    ) -> FetchResult;
}

/// Success payload of the contents endpoint. Only the fields we use.
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: Option<String>,
    encoding: Option<String>,
    sha: Option<String>,
}

/// Contents endpoint client for one API host
#[derive(Clone)]
pub struct ContentsClient {
    net: NetClient,
    base: Url,
    policy: ApiPolicy,
}

impl ContentsClient {
    /// Create a client for `policy.base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(policy: ApiPolicy) -> Result<Self, Error> {
        let base = Url::parse(&policy.base_url)
            .map_err(|e| NetworkError::InvalidUrl(format!("{}: {e}", policy.base_url)))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(NetworkError::InvalidUrl(policy.base_url.clone()).into());
        }

        let net = NetClient::new(&NetConfig::from_policy(&policy))?;
        Ok(Self { net, base, policy })
    }

    /// `{base}/repos/{org}/{repo}/contents/{path}?ref={branch}`
    ///
    /// Each `/`-separated part of `path` becomes one percent-encoded segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry path segments.
    pub fn contents_url(
        &self,
        organization: &str,
        repository: &str,
        path: &str,
        branch: &str,
    ) -> Result<Url, NetworkError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| NetworkError::InvalidUrl(self.base.to_string()))?;
            segments
                .pop_if_empty()
                .push("repos")
                .push(organization)
                .push(repository)
                .push("contents");
            for part in path.split('/').filter(|part| !part.is_empty()) {
                segments.push(part);
            }
        }
        url.query_pairs_mut().append_pair("ref", branch);
        Ok(url)
    }

    fn snippet(&self, text: &str) -> String {
        truncate_chars(text, self.policy.body_snippet_chars)
    }

    /// Turn a 200 body into `Found`, decoding base64 payloads.
    fn decode_success(&self, status: u16, body: &str) -> FetchResult {
        let parsed: ContentsResponse = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "contents response is not a file object");
                return FetchResult::ApiError {
                    status,
                    body_snippet: self.snippet(body),
                };
            }
        };

        let Some(content) = parsed.content else {
            warn!("contents response has no content field");
            return FetchResult::ApiError {
                status,
                body_snippet: self.snippet(body),
            };
        };

        if parsed.encoding.as_deref() != Some(self.policy.content_encoding.as_str()) {
            return FetchResult::Found {
                content,
                sha: parsed.sha,
            };
        }

        match decode_base64_text(&content) {
            Ok(text) => FetchResult::Found {
                content: text,
                sha: parsed.sha,
            },
            Err(message) => {
                warn!(%message, "failed to decode file content");
                FetchResult::ApiError {
                    status,
                    body_snippet: self.snippet(&message),
                }
            }
        }
    }
}

#[async_trait]
impl ContentFetcher for ContentsClient {
    async fn fetch(
        &self,
        path: &str,
        credential: &Credential,
        organization: &str,
        repository: &str,
        branch: &str,
    ) -> FetchResult {
        let url = match self.contents_url(organization, repository, path, branch) {
            Ok(url) => url,
            Err(e) => {
                return FetchResult::TransportError {
                    message: e.to_string(),
                }
            }
        };
        debug!(%url, "requesting file contents");

        let response = match self
            .net
            .inner()
            .get(url)
            .bearer_auth(credential.access_token())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return FetchResult::TransportError {
                    message: describe_transport_error(&e),
                }
            }
        };

        let status = response.status().as_u16();
        debug!(status, "contents response received");

        if status == self.policy.not_found_status {
            return FetchResult::NotFound;
        }

        if status == self.policy.ok_status {
            return match response.text().await {
                Ok(body) => self.decode_success(status, &body),
                Err(e) => FetchResult::TransportError {
                    message: describe_transport_error(&e),
                },
            };
        }

        // The status is already known; an unreadable error body only costs
        // the snippet.
        let body = response.text().await.unwrap_or_default();
        FetchResult::ApiError {
            status,
            body_snippet: self.snippet(&body),
        }
    }
}

/// Decode a base64 payload to UTF-8 text.
///
/// GitHub wraps base64 content with newlines, so ASCII whitespace is removed
/// before decoding.
///
/// # Errors
///
/// Returns a description if the payload is not base64 or not UTF-8.
pub fn decode_base64_text(encoded: &str) -> Result<String, String> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| format!("invalid base64 content: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("content is not valid UTF-8: {e}"))
}

/// First `max` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
