//! HTTP client abstraction for testability
//!
//! The [`HttpClient`] trait allows for dependency injection and easier
//! testing by enabling mock HTTP clients in tests. All requests are
//! non-blocking; the resolver suspends while an endpoint responds.

use super::error::GisError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// User-Agent sent with every feature-service request. Some ArcGIS hosts
/// reject anonymous requests without one.
const USER_AGENT: &str = "Texas Law Enforcement Jurisdiction App";

/// Default HTTP timeout for feature-service queries.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for asynchronous HTTP GET operations.
pub trait HttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, GisError>> + Send;
}

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, GisError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a new ReqwestClient with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, GisError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GisError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, GisError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(GisError::Http(format!("Request failed: {}", e)));
            }
        };

        if !response.status().is_success() {
            return Err(GisError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => Err(GisError::Http(format!("Failed to read response: {}", e))),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock HTTP client returning a single canned response for any URL.
    #[derive(Clone)]
    pub struct MockHttpClient {
        pub response: Result<Vec<u8>, GisError>,
    }

    impl HttpClient for MockHttpClient {
        async fn get(&self, _url: &str) -> Result<Vec<u8>, GisError> {
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_mock_client_success() {
        let mock = MockHttpClient {
            response: Ok(vec![1, 2, 3, 4]),
        };

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_mock_client_error() {
        let mock = MockHttpClient {
            response: Err(GisError::Http("Test error".to_string())),
        };

        let result = mock.get("http://example.com").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(ReqwestClient::new().is_ok());
        assert!(ReqwestClient::with_timeout(Duration::from_secs(1)).is_ok());
    }
}
