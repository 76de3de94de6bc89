//! Request policy handed to the fetcher

use crate::constants;

/// Header values, status codes and limits for one contents request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPolicy {
    pub base_url: String,
    pub accept: String,
    pub user_agent: String,
    pub ok_status: u16,
    pub not_found_status: u16,
    pub body_snippet_chars: usize,
    pub content_encoding: String,
}

impl Default for ApiPolicy {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_API_URL.to_string(),
            accept: constants::GITHUB_API_VERSION.to_string(),
            user_agent: format!("ghverify/{}", env!("CARGO_PKG_VERSION")),
            ok_status: constants::STATUS_OK,
            not_found_status: constants::STATUS_NOT_FOUND,
            body_snippet_chars: constants::RESPONSE_TRUNCATE_CHARS,
            content_encoding: constants::BASE64_ENCODING.to_string(),
        }
    }
}

impl ApiPolicy {
    /// Point at another host (GitHub Enterprise, a mock server). Trailing
    /// slashes are dropped so paths join cleanly.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}
