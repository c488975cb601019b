use std::time::Duration;

use serde_json::Value;

use crate::error::FetchError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issue exactly one GET against `url` and parse the body as JSON.
///
/// No retries, no auth, redirects follow reqwest's default policy. The
/// timeout covers the whole request, connect included.
pub fn fetch(url: &str, timeout: Duration) -> Result<Value, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let resp = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    resp.json().map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
