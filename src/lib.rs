//! HTTP message wrapper and credential store for a payment API client.
//!
//! The transport layer records what went over the wire in an
//! [`HttpMessage`], which parses headers and JSON bodies as they are set.
//! Raw messages are passed through [`maybe_obfuscate`] before logging so
//! merchant credentials and consumer details never reach a log sink.

pub mod config;
pub mod error;
pub mod http;

pub use config::{ApiEnvironment, SdkConfig};
pub use error::{Error, Result};
pub use http::headers::HttpHeaders;
pub use http::message::{HeaderSource, HttpMessage};
pub use http::obfuscate::maybe_obfuscate;
