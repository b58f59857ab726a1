//! Blocking reqwest implementation of [`HttpClient`].

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, trace, warn};

use super::{HttpClient, HttpError};

/// User-Agent sent with every archive request.
const USER_AGENT: &str = concat!("unwise-fetch/", env!("CARGO_PKG_VERSION"));

/// Real HTTP client implementation using reqwest.
///
/// The client is cheap to clone and shares its connection pool between
/// clones, so one instance serves every worker thread.
#[derive(Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl std::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestClient").finish_non_exhaustive()
    }
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with reqwest's default timeout.
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new ReqwestClient with a custom request timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send() {
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
                return Err(HttpError::Request {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = url, status = status.as_u16(), "HTTP error status");
            return Err(HttpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        match response.bytes() {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(HttpError::Body {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}
