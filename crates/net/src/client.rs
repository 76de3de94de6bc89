//! HTTP client carrying the fixed request headers

use ghverify_config::ApiPolicy;
use ghverify_errors::{Error, NetworkError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

/// Network client configuration
#[derive(Debug, Clone)]
pub struct NetConfig {
    pub accept: String,
    pub user_agent: String,
}

impl NetConfig {
    #[must_use]
    pub fn from_policy(policy: &ApiPolicy) -> Self {
        Self {
            accept: policy.accept.clone(),
            user_agent: policy.user_agent.clone(),
        }
    }
}

/// HTTP client wrapper
///
/// No retries and no timeout beyond what reqwest imposes by default: one
/// call is one round trip.
#[derive(Clone)]
pub struct NetClient {
    client: Client,
}

impl NetClient {
    /// Create a new network client
    ///
    /// # Errors
    ///
    /// Returns an error if a fixed header value is not a valid header or the
    /// underlying reqwest client fails to initialize.
    pub fn new(config: &NetConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let accept =
            HeaderValue::from_str(&config.accept).map_err(|_| NetworkError::InvalidHeader {
                header: ACCEPT.to_string(),
            })?;
        headers.insert(ACCEPT, accept);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| NetworkError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Get the underlying reqwest client for advanced usage
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Describe a reqwest failure the way the fetch report shows it.
pub(crate) fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("request timed out: {error}")
    } else if error.is_connect() {
        format!("connection failed: {error}")
    } else if error.is_body() || error.is_decode() {
        format!("failed to read response body: {error}")
    } else {
        format!("request failed: {error}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_the_default_policy() {
        assert!(NetClient::new(&NetConfig::from_policy(&ApiPolicy::default())).is_ok());
    }

    #[test]
    fn rejects_an_accept_value_that_is_not_a_header() {
        let config = NetConfig {
            accept: "application/json\r\nX-Injected: 1".to_string(),
            user_agent: "ghverify/test".to_string(),
        };

        let err = NetClient::new(&config).err().unwrap();
        assert!(matches!(
            err,
            Error::Network(NetworkError::InvalidHeader { .. })
        ));
    }
}
