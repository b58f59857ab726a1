//! HTTP client abstraction for testability
//!
//! All archive traffic (index and tile products) goes through the
//! [`HttpClient`] trait so that tests can inject a mock client.
//!
//! ```ignore
//! use unwise_fetch::http::{HttpClient, ReqwestClient};
//!
//! let client = ReqwestClient::new()?;
//! let body = client.get("https://example.org/base/tr_neo8_index.fits")?;
//! ```

mod client;

pub use client::ReqwestClient;

use thiserror::Error;

/// Errors produced by an [`HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The request could not be sent or the connection failed
    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The server answered with a non-success status
    #[error("Status code {status} received for \"{url}\"")]
    Status { url: String, status: u16 },

    /// The response body could not be read
    #[error("Failed to read response from {url}: {reason}")]
    Body { url: String, reason: String },

    /// The client itself could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Build(String),
}

/// Trait for synchronous HTTP GET operations.
///
/// Implementations must be shareable across the worker threads of the job
/// executor, hence the `Send + Sync` bound.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// Returns the full response body, or an error if the request failed or
    /// the response status was not a success.
    fn get(&self, url: &str) -> Result<Vec<u8>, HttpError>;
}

impl<T: HttpClient + ?Sized> HttpClient for std::sync::Arc<T> {
    fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        (**self).get(url)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock HTTP client serving canned bodies keyed by URL.
    ///
    /// Unknown URLs answer with a 404 status. Every requested URL is recorded.
    #[derive(Default)]
    pub struct MockHttpClient {
        responses: HashMap<String, Result<Vec<u8>, HttpError>>,
        requests: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_body(mut self, url: &str, body: &[u8]) -> Self {
            self.responses.insert(url.to_string(), Ok(body.to_vec()));
            self
        }

        pub fn with_status(mut self, url: &str, status: u16) -> Self {
            self.responses.insert(
                url.to_string(),
                Err(HttpError::Status {
                    url: url.to_string(),
                    status,
                }),
            );
            self
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.responses.get(url).cloned().unwrap_or_else(|| {
                Err(HttpError::Status {
                    url: url.to_string(),
                    status: 404,
                })
            })
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::new().with_body("http://example.com/a", &[1, 2, 3, 4]);

        let result = mock.get("http://example.com/a");
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.requests(), vec!["http://example.com/a".to_string()]);
    }

    #[test]
    fn test_mock_client_unknown_url_is_404() {
        let mock = MockHttpClient::new();

        let result = mock.get("http://example.com/missing");
        assert_eq!(
            result,
            Err(HttpError::Status {
                url: "http://example.com/missing".to_string(),
                status: 404
            })
        );
    }

    #[test]
    fn test_status_error_message_names_status_and_url() {
        let err = HttpError::Status {
            url: "https://example.org/x.fits".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "Status code 503 received for \"https://example.org/x.fits\""
        );
    }

    #[test]
    fn test_arc_client_delegates() {
        let mock = std::sync::Arc::new(MockHttpClient::new().with_body("http://a", b"ok"));
        assert_eq!(HttpClient::get(&mock, "http://a").unwrap(), b"ok".to_vec());
    }
}
