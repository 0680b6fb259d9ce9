//! Blocking HTTP GET of one image.
//!
//! Uses the curl crate (libcurl) in the calling thread. The whole body is
//! buffered in memory; image files are written in one piece afterwards.

mod error;
mod validate;

pub use error::FetchError;
pub use validate::validate_url;

use crate::config::DwimgsConfig;
use std::time::Duration;

/// Final response of a GET, after redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u32,
    /// Declared `Content-Type`, if the server sent one.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the declared content type mentions `image`.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .map_or(false, |ct| ct.contains("image"))
    }

    /// Returns the body if this response is a 2xx image, otherwise the reason it is not.
    pub fn into_image(self) -> Result<Vec<u8>, FetchError> {
        if !self.is_success() {
            return Err(FetchError::Http(self.status));
        }
        if !self.is_image() {
            return Err(FetchError::NotImage(self.content_type));
        }
        Ok(self.body)
    }
}

/// Something that can GET a URL. Implemented by [`CurlFetcher`]; tests plug in stubs.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// Transfer options for [`CurlFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub follow_redirects: bool,
    pub max_redirections: u32,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions::from(&DwimgsConfig::default())
    }
}

impl From<&DwimgsConfig> for FetchOptions {
    fn from(cfg: &DwimgsConfig) -> Self {
        FetchOptions {
            follow_redirects: cfg.follow_redirects,
            max_redirections: cfg.max_redirections,
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// libcurl-backed fetcher. A fresh Easy handle is used per URL.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: FetchOptions,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        CurlFetcher { options }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl Fetch for CurlFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let parsed = validate_url(url)?;
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(parsed.as_str())?;
        easy.follow_location(self.options.follow_redirects)?;
        easy.max_redirections(self.options.max_redirections)?;
        // No timeouts unless configured; a stalled server blocks the run.
        if let Some(t) = self.options.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.options.timeout {
            easy.timeout(t)?;
        }
        if let Some(ua) = &self.options.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let content_type = easy.content_type()?.map(str::to_string);

        Ok(FetchResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u32, content_type: Option<&str>) -> FetchResponse {
        FetchResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: b"bytes".to_vec(),
        }
    }

    #[test]
    fn image_2xx_is_accepted() {
        let body = response(200, Some("image/jpeg")).into_image().unwrap();
        assert_eq!(body, b"bytes");
        assert!(response(204, Some("image/png")).into_image().is_ok());
    }

    #[test]
    fn error_status_rejected() {
        assert!(matches!(
            response(404, Some("image/png")).into_image(),
            Err(FetchError::Http(404))
        ));
        assert!(matches!(
            response(301, Some("image/png")).into_image(),
            Err(FetchError::Http(301))
        ));
    }

    #[test]
    fn non_image_content_rejected() {
        match response(200, Some("text/html; charset=utf-8")).into_image() {
            Err(FetchError::NotImage(Some(ct))) => assert!(ct.starts_with("text/html")),
            other => panic!("expected NotImage, got {:?}", other),
        }
        assert!(matches!(
            response(200, None).into_image(),
            Err(FetchError::NotImage(None))
        ));
    }

    #[test]
    fn content_type_match_is_substring() {
        assert!(response(200, Some("image/svg+xml")).is_image());
        assert!(response(200, Some("application/x-image")).is_image());
        assert!(!response(200, Some("Image/PNG")).is_image());
    }

    #[test]
    fn options_from_config() {
        let cfg = DwimgsConfig {
            timeout_secs: Some(30),
            user_agent: Some("ua".to_string()),
            ..DwimgsConfig::default()
        };
        let opts = FetchOptions::from(&cfg);
        assert!(opts.follow_redirects);
        assert_eq!(opts.max_redirections, 10);
        assert_eq!(opts.timeout, Some(Duration::from_secs(30)));
        assert!(opts.connect_timeout.is_none());
        assert_eq!(opts.user_agent.as_deref(), Some("ua"));
    }

    #[test]
    fn curl_fetcher_rejects_invalid_url_without_network() {
        let f = CurlFetcher::default();
        assert!(matches!(f.get("not a url"), Err(FetchError::InvalidUrl(_))));
        assert!(matches!(
            f.get("gopher://example.com/x.png"),
            Err(FetchError::UnsupportedScheme(_))
        ));
    }
}
