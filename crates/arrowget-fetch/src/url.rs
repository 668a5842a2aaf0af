//! Endpoint URL handling.

use reqwest::Url;

use crate::FetchError;

/// Endpoint used when no URL is given.
pub const DEFAULT_URL: &str = "http://localhost:8000";

/// Parses and validates an endpoint URL.
///
/// Only `http` and `https` URLs are accepted.
///
/// # Example
///
/// ```
/// use arrowget_fetch::url::{DEFAULT_URL, parse_url};
///
/// let url = parse_url(DEFAULT_URL).unwrap();
/// assert_eq!(url.port(), Some(8000));
/// assert!(parse_url("ftp://localhost/feed").is_err());
/// ```
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] if the string is not an absolute
/// HTTP(S) URL.
pub fn parse_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl(format!(
            "{url}: unsupported scheme '{other}'"
        ))),
    }
}
