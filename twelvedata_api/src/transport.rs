//! The single capability the clients need from the network: GET a URL, get bytes back.

use std::time::Duration;

use url::Url;

use crate::Error;

/// Request timeout used by [`HttpTransport::new`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the body of a fully built URL.
///
/// Implementations must fail on transport errors and on any status other
/// than 200. Any `Fn(&Url) -> Result<Vec<u8>, Error>` is a transport, which
/// is how tests stub the network.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, Error>;
}

impl<F> Transport for F
where
    F: Fn(&Url) -> Result<Vec<u8>, Error>,
{
    fn get(&self, url: &Url) -> Result<Vec<u8>, Error> {
        self(url)
    }
}

/// Blocking HTTP transport backed by `reqwest`.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a transport with a 30-second request timeout.
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client.
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, Error> {
        let resp = self
            .client
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .map_err(|e| {
                // The URL carries the API key.
                let e = e.without_url();
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.bytes().map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if status != reqwest::StatusCode::OK {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body.to_vec())
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
