pub mod headers;
pub mod message;
pub mod obfuscate;
pub mod parser;

/// Protocol versions a status line can carry.
/// The raw version string of a message is kept as-is in
/// [`HttpMessage::http_version`](crate::http::message::HttpMessage::http_version);
/// this is the typed view of it.
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy)]
pub enum HttpVersion {
    V0_9,
    V1_0,
    V1_1,
    V2_0,
    V3_0,
}

impl HttpVersion {
    /// Maps a version string such as `1.1` or `2` to a known version.
    pub fn from_version_str(v: &str) -> Option<HttpVersion> {
        let (major, minor) = v.split_once('.').unwrap_or((v, "0"));
        match (major.parse::<u8>().ok()?, minor.parse::<u8>().ok()?) {
            (0, 9) => Some(HttpVersion::V0_9),
            (1, 0) => Some(HttpVersion::V1_0),
            (1, 1) => Some(HttpVersion::V1_1),
            (2, 0) => Some(HttpVersion::V2_0),
            (3, 0) => Some(HttpVersion::V3_0),
            _ => None,
        }
    }
}
