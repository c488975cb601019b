use std::path::PathBuf;

use thiserror::Error;

/// Failures while issuing the single GET request or decoding its body.
///
/// Any of these aborts the run before an output file is created.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, timeout or other transport-level failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but outside the 2xx range.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body arrived but is not valid JSON.
    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Application-level failure reported inside an otherwise successful response.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The product lookup came back with `status == 0`; the payload carries
    /// the server's own explanation in `status_verbose`.
    #[error("product not found: {0}")]
    NotFound(String),

    /// The response envelope lacks a field the shape requires.
    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),
}

/// Failure while serializing or writing the output file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not serialize value to JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
