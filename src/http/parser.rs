use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::http::headers::HttpHeaders;

pub const UNKNOWN_HTTP_VERSION: &str = "Unknown";

/// What a raw header block breaks down into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    pub http_version: String,
    pub status_code: Option<u16>,
    pub headers: HttpHeaders,
}

static STATUS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bHTTP/([0-9.]+)\b(?:\s+(\d{3})\b)?").unwrap());

/// Parses a raw header block such as the one a transport hands back
/// alongside a response body.
///
/// The first line is only inspected for the protocol version (and a status
/// code when it is a response status line). Every following line that has a
/// colon becomes a header; lines without one, including the blank line that
/// terminates the block, are skipped.
///
/// `None` means the transport produced no headers at all and parses like an
/// empty block.
pub fn parse_raw_headers(raw: Option<&str>) -> HeaderBlock {
    let raw = raw.unwrap_or("");
    let mut lines = raw.split('\n');

    let (http_version, status_code) = match lines.next().and_then(|l| STATUS_LINE.captures(l)) {
        Some(caps) => (
            caps[1].to_string(),
            caps.get(2).and_then(|m| m.as_str().parse::<u16>().ok()),
        ),
        None => (UNKNOWN_HTTP_VERSION.to_string(), None),
    };

    let mut headers = HttpHeaders::new();
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name, value);
        }
    }

    tracing::trace!(%http_version, ?status_code, count = headers.len(), "parsed header block");

    HeaderBlock {
        http_version,
        status_code,
        headers,
    }
}

/// `true` when the content type declares JSON, ignoring case and any
/// parameters after the media type.
pub fn is_json(content_type: Option<&str>) -> bool {
    const JSON: &str = "application/json";

    content_type
        .and_then(|ct| ct.get(..JSON.len()))
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(JSON))
}

/// Decodes `body` according to `content_type`.
///
/// - empty body, or a content type that is not JSON: `Ok(None)`
/// - declared JSON: the decoded value, or [`Error::Parsing`] when it does
///   not decode or decodes to `null`
/// - no content type: JSON is guessed; a failed guess is `Ok(None)`
pub fn parse_raw_body(body: &str, content_type: Option<&str>) -> Result<Option<Value>> {
    if body.is_empty() {
        return Ok(None);
    }

    let declared = is_json(content_type);
    if !declared && content_type.is_some() {
        return Ok(None);
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) if declared => {
            tracing::warn!("body declared as JSON decoded to null");
            Err(Error::null_body())
        }
        Ok(Value::Null) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(err) if declared => {
            tracing::warn!(error = %err, "body declared as JSON failed to parse");
            Err(Error::parsing(&err))
        }
        Err(err) => {
            // The API sometimes omits the Content-Type header.
            tracing::debug!(error = %err, "body without content type is not JSON");
            Ok(None)
        }
    }
}
