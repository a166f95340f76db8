use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring the SDK or shaping an HTTP message.
#[derive(Debug, Error)]
pub enum Error {
    /// A value broke the contract of the setter it was passed to.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The body was declared as JSON but could not be decoded, or decoded
    /// to `null`.
    #[error("failed to parse JSON body: {message} (code {code})")]
    Parsing { message: String, code: u8 },

    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to deserialize config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn parsing(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        // 1 io, 2 syntax, 3 data, 4 eof
        let code = match err.classify() {
            Category::Io => 1,
            Category::Syntax => 2,
            Category::Data => 3,
            Category::Eof => 4,
        };

        Error::Parsing {
            message: err.to_string(),
            code,
        }
    }

    /// A declared JSON body that decoded to `null` carries code 0.
    pub(crate) fn null_body() -> Self {
        Error::Parsing {
            message: "JSON body decoded to null".to_string(),
            code: 0,
        }
    }
}
