//! Up-front URL checks, before any network I/O.

use super::FetchError;

/// Parses `raw` and accepts only absolute `http`/`https` URLs.
///
/// libcurl would quietly guess `http://` for a scheme-less string; rejecting it
/// here keeps "missing scheme" a per-URL failure.
pub fn validate_url(raw: &str) -> Result<url::Url, FetchError> {
    let parsed = url::Url::parse(raw)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}
