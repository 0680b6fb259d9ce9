//! Error type for a single image fetch.

use thiserror::Error;

/// Why one URL did not produce a saved image.
///
/// The pipeline only reports success or failure per URL; the variant is kept
/// for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The string does not parse as an absolute URL (e.g. missing scheme).
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Parsed, but not something we fetch over HTTP.
    #[error("unsupported URL scheme `{0}`")]
    UnsupportedScheme(String),
    /// libcurl reported an error (DNS, connect, TLS, timeout, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Final response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response is not declared as an image.
    #[error("not an image (content type: {})", .0.as_deref().unwrap_or("none"))]
    NotImage(Option<String>),
    /// Writing the image to disk failed.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
