//! Error types for the API client.

use crate::types::{Interval, ParseError};

/// Errors that can occur when making API requests.
///
/// A failed call returns exactly one of these, describing the first point
/// of failure: URL construction, transport, then decoding.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The endpoint URL could not be built from the configured base URL.
    #[error("failed to parse base URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The HTTP request failed before a response was received.
    #[error("request failed: {0}")]
    RequestFailed(String),
    /// The API answered with a non-200 status and a body snippet.
    #[error("unexpected status code '{status}'")]
    HttpStatus { status: u16, body: String },
    /// The response body was not a well-formed envelope.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// A single value inside the envelope could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The API answered 200 with an error envelope (`"status": "error"`).
    #[error("api error {code}: {message}")]
    Api { code: u16, message: String },
    /// The API key could not be found in the environment.
    #[error("environment variable {0} is not set")]
    MissingApiKey(&'static str),
    /// A string did not name a supported interval.
    #[error("unsupported interval '{0}'")]
    UnknownInterval(String),
    /// No time format is registered for the requested interval.
    #[error("no time format registered for interval '{0}'")]
    UnmappedInterval(Interval),
}
