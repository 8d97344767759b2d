//! HTML response filter
//!
//! Boundary between the compressor and an HTTP stack. Given the request
//! headers and a fully buffered response, the filter decides whether the body
//! is HTML the client asked for, runs it through the [`Compressor`], and
//! rewrites Content-Length to match the new body.
//!
//! Skipped responses are left untouched:
//! - filter disabled
//! - client `Accept` does not mention `text/html`
//! - response `Content-Type` present and not `text/html`
//! - response already carries a `Content-Encoding`
//! - declared charset is not UTF-8, or the body is not valid UTF-8

pub mod config;

pub use config::FilterConfig;

use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, ACCEPT, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderValue, Response};
use tracing::debug;

use crate::compressor::Compressor;
use crate::constants::HTML_MEDIA_TYPE;

/// Reason a response was passed through unmodified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Filter disabled in configuration
    Disabled,
    /// Client did not ask for HTML
    NotAcceptedByClient,
    /// Response is some other media type
    NonHtmlContentType,
    /// Body is already encoded (gzip, br, ...)
    AlreadyEncoded,
    /// Declared charset is not UTF-8
    UnsupportedCharset,
    /// Body bytes are not valid UTF-8
    NonUtf8Body,
    /// Nothing to compress
    EmptyBody,
}

impl SkipReason {
    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            SkipReason::Disabled => "html compression disabled",
            SkipReason::NotAcceptedByClient => "client does not accept text/html",
            SkipReason::NonHtmlContentType => "content type is not text/html",
            SkipReason::AlreadyEncoded => "response already encoded",
            SkipReason::UnsupportedCharset => "charset is not utf-8",
            SkipReason::NonUtf8Body => "body is not valid utf-8",
            SkipReason::EmptyBody => "empty body",
        }
    }
}

/// What the filter did to a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Compressed {
        original_size: usize,
        compressed_size: usize,
    },
    Skipped(SkipReason),
}

impl FilterOutcome {
    pub fn is_compressed(&self) -> bool {
        matches!(self, FilterOutcome::Compressed { .. })
    }
}

/// True when an `Accept` header value mentions `text/html`
pub fn accepts_html(accept: Option<&str>) -> bool {
    accept
        .map(|value| value.to_ascii_lowercase().contains(HTML_MEDIA_TYPE))
        .unwrap_or(false)
}

/// Media type of a Content-Type value, lowercased and without parameters
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// True when the Content-Type names `text/html`
pub fn is_html_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| media_type(ct) == HTML_MEDIA_TYPE)
        .unwrap_or(false)
}

/// True when the Content-Type has no charset or a UTF-8 one
pub fn is_utf8_charset(content_type: Option<&str>) -> bool {
    let Some(ct) = content_type else {
        return true;
    };
    let charset = ct.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_ascii_lowercase())
    });
    match charset {
        None => true,
        Some(cs) => cs == "utf-8" || cs == "utf8",
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &HeaderName) -> Option<&'h str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Applies the compressor to buffered HTML responses
#[derive(Debug, Clone, Default)]
pub struct HtmlResponseFilter {
    compressor: Compressor,
    config: FilterConfig,
}

impl HtmlResponseFilter {
    pub fn new(compressor: Compressor, config: FilterConfig) -> Self {
        Self { compressor, config }
    }

    /// Header-only part of the decision; `None` means the body may be compressed
    pub fn check_headers(
        &self,
        request_headers: &HeaderMap,
        response_headers: &HeaderMap,
    ) -> Option<SkipReason> {
        if !self.config.enabled {
            return Some(SkipReason::Disabled);
        }
        if !accepts_html(header_str(request_headers, &ACCEPT)) {
            return Some(SkipReason::NotAcceptedByClient);
        }

        let content_type = header_str(response_headers, &CONTENT_TYPE);
        if content_type.is_some() && !is_html_content_type(content_type) {
            return Some(SkipReason::NonHtmlContentType);
        }
        if response_headers.contains_key(CONTENT_ENCODING) {
            return Some(SkipReason::AlreadyEncoded);
        }
        if !is_utf8_charset(content_type) {
            return Some(SkipReason::UnsupportedCharset);
        }

        None
    }

    /// Compress the response body in place when appropriate
    pub fn apply(&self, request_headers: &HeaderMap, response: &mut Response<Bytes>) -> FilterOutcome {
        if let Some(reason) = self.check_headers(request_headers, response.headers()) {
            debug!(reason = reason.description(), "html compression skipped");
            return FilterOutcome::Skipped(reason);
        }
        if response.body().is_empty() {
            return FilterOutcome::Skipped(SkipReason::EmptyBody);
        }

        let Ok(text) = std::str::from_utf8(response.body()) else {
            debug!("html compression skipped: body is not valid utf-8");
            return FilterOutcome::Skipped(SkipReason::NonUtf8Body);
        };
        let (compressed, stats) = self.compressor.compress_with_stats(text);

        let compressed_size = compressed.len();
        *response.body_mut() = Bytes::from(compressed);

        let headers = response.headers_mut();
        if self.config.always_set_content_length || headers.contains_key(CONTENT_LENGTH) {
            headers.insert(CONTENT_LENGTH, HeaderValue::from(compressed_size));
        }

        debug!(
            original_size = stats.original_size,
            compressed_size,
            bytes_saved = stats.bytes_saved(),
            "html response compressed"
        );

        FilterOutcome::Compressed {
            original_size: stats.original_size,
            compressed_size,
        }
    }
}
