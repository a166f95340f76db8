//! A single HTTP request or response as seen by the SDK.
//!
//! The transport layer builds an [`HttpMessage`] empty and fills it in with
//! [`set_content_type`](HttpMessage::set_content_type), then
//! [`set_raw_headers`](HttpMessage::set_raw_headers), then
//! [`set_raw_body`](HttpMessage::set_raw_body). Body parsing depends on the
//! content type, so that order matters. Each raw setter re-derives its parsed
//! counterpart immediately.

use serde_json::Value;

use crate::config::SdkConfig;
use crate::error::Result;
use crate::http::HttpVersion;
use crate::http::headers::HttpHeaders;
use crate::http::obfuscate::maybe_obfuscate;
use crate::http::parser::{self, UNKNOWN_HTTP_VERSION};

/// Raw headers as handed over by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSource {
    Text(String),
    /// The transport failed before any header was received.
    NetworkFailure,
}

impl From<&str> for HeaderSource {
    fn from(raw: &str) -> Self {
        HeaderSource::Text(raw.to_string())
    }
}

impl From<String> for HeaderSource {
    fn from(raw: String) -> Self {
        HeaderSource::Text(raw)
    }
}

impl From<Option<String>> for HeaderSource {
    fn from(raw: Option<String>) -> Self {
        raw.map_or(HeaderSource::NetworkFailure, HeaderSource::Text)
    }
}

#[derive(Debug, Clone)]
pub struct HttpMessage {
    http_version: String,
    status_code: Option<u16>,
    content_type: Option<String>,

    // headers
    raw_headers: Option<String>,
    parsed_headers: HttpHeaders,

    // body
    raw_body: Option<String>,
    parsed_body: Option<Value>,
}

impl Default for HttpMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpMessage {
    pub fn new() -> Self {
        Self {
            http_version: UNKNOWN_HTTP_VERSION.to_string(),
            status_code: None,
            content_type: None,
            raw_headers: None,
            parsed_headers: HttpHeaders::new(),
            raw_body: None,
            parsed_body: None,
        }
    }

    pub fn http_version(&self) -> &str {
        &self.http_version
    }

    /// The version as one of the known protocol versions, if it is one.
    pub fn known_version(&self) -> Option<HttpVersion> {
        HttpVersion::from_version_str(&self.http_version)
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The content type without parameters.
    ///
    /// For example:
    /// - `text/html; charset=UTF-8` becomes `text/html`
    /// - `text/plain;charset=iso-8859-1` becomes `text/plain`
    pub fn content_type_simplified(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .map(|ct| ct.split_once(';').map_or(ct, |(media, _)| media))
    }

    /// `None` marks the content type as unknown, which makes
    /// [`set_raw_body`](Self::set_raw_body) guess JSON from the body.
    pub fn set_content_type(&mut self, content_type: Option<&str>) -> &mut Self {
        self.content_type = content_type.map(str::to_string);
        self
    }

    pub fn is_json(&self) -> bool {
        parser::is_json(self.content_type())
    }

    pub fn raw_headers(&self) -> Option<&str> {
        self.raw_headers.as_deref()
    }

    pub fn set_raw_headers(&mut self, source: impl Into<HeaderSource>) -> &mut Self {
        self.raw_headers = match source.into() {
            HeaderSource::Text(raw) => Some(raw),
            HeaderSource::NetworkFailure => {
                tracing::debug!("no headers received, treating message as header-less");
                None
            }
        };

        let block = parser::parse_raw_headers(self.raw_headers.as_deref());
        self.http_version = block.http_version;
        self.status_code = block.status_code;
        self.parsed_headers = block.headers;
        self
    }

    pub fn parsed_headers(&self) -> &HttpHeaders {
        &self.parsed_headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.parsed_headers.get(name)
    }

    pub fn raw_body(&self) -> Option<&str> {
        self.raw_body.as_deref()
    }

    /// Stores the body and decodes it.
    ///
    /// Fails with [`Error::Parsing`](crate::Error::Parsing) only when the
    /// content type declares JSON and the body does not decode, or decodes
    /// to `null`; the message is left untouched in that case.
    pub fn set_raw_body(&mut self, raw_body: impl Into<String>) -> Result<&mut Self> {
        let raw_body = raw_body.into();
        let parsed_body = parser::parse_raw_body(&raw_body, self.content_type())?;

        self.raw_body = Some(raw_body);
        self.parsed_body = parsed_body;
        Ok(self)
    }

    pub fn parsed_body(&self) -> Option<&Value> {
        self.parsed_body.as_ref()
    }

    /// Raw headers followed by the raw body, as it went over the wire.
    pub fn raw(&self) -> String {
        let mut raw = self.raw_headers.clone().unwrap_or_default();
        if let Some(body) = &self.raw_body {
            raw.push_str(body);
        }
        raw
    }

    /// The raw message as it may be written to a log, obfuscated unless
    /// `config` disables it.
    pub fn loggable_raw(&self, config: &SdkConfig) -> String {
        maybe_obfuscate(config, &self.raw()).into_owned()
    }

    pub fn log_raw(&self, config: &SdkConfig) {
        tracing::debug!(
            http_version = %self.http_version,
            status_code = ?self.status_code,
            raw = %self.loggable_raw(config),
            "http message"
        );
    }
}
