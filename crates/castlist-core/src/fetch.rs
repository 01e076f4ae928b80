//! Single blocking HTTP GET with JSON decoding.
//!
//! Uses the curl crate (libcurl) to fetch a resource body into memory. One
//! handle is created per request and dropped when the transfer resolves, so
//! a fetch is fully over (success or failure) before the caller can start
//! the next one.

use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// Error from a single resource fetch (curl failure, HTTP error, or malformed body).
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, etc.).
    Curl(curl::Error),
    /// Final HTTP response had a non-200 status.
    Http(u32),
    /// Response body was not valid JSON of the expected shape.
    Decode(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Decode(e) => write!(f, "malformed response body: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Decode(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

/// Performs a GET request and returns the response body.
///
/// Follows redirects; only a final 200 counts as success. Runs on the
/// current thread and blocks until the transfer resolves.
pub fn http_get(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(FetchError::Curl)?;
    easy.follow_location(true).map_err(FetchError::Curl)?;
    easy.max_redirections(10).map_err(FetchError::Curl)?;
    easy.connect_timeout(Duration::from_secs(15))
        .map_err(FetchError::Curl)?;
    easy.timeout(Duration::from_secs(30))
        .map_err(FetchError::Curl)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(FetchError::Curl)?;
        transfer.perform().map_err(FetchError::Curl)?;
    }

    let code = easy.response_code().map_err(FetchError::Curl)?;
    if code != 200 {
        tracing::debug!("GET {} returned HTTP {}", url, code);
        return Err(FetchError::Http(code));
    }
    Ok(body)
}

/// GETs `url` and decodes the JSON body into `T`.
pub fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = http_get(url)?;
    serde_json::from_slice(&body).map_err(FetchError::Decode)
}
