//! SDK credentials and logging settings.
//!
//! A single [`SdkConfig`] is built when the SDK starts, either through its
//! setters or from a TOML file, and handed by reference to every component
//! that needs credentials or has to decide whether to obfuscate logs.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// The two API environments a merchant account can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEnvironment {
    Sandbox,
    Production,
}

impl ApiEnvironment {
    /// Case-insensitive match against `sandbox` or `production`.
    pub fn parse(value: &str) -> Result<ApiEnvironment> {
        if value.eq_ignore_ascii_case("sandbox") {
            Ok(ApiEnvironment::Sandbox)
        } else if value.eq_ignore_ascii_case("production") {
            Ok(ApiEnvironment::Production)
        } else {
            Err(Error::InvalidArgument(format!(
                "Expected 'sandbox' or 'production'; '{value}' given"
            )))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiEnvironment::Sandbox => "sandbox",
            ApiEnvironment::Production => "production",
        }
    }
}

#[derive(Clone)]
pub struct SdkConfig {
    merchant_id: Option<String>,
    secret_key: Option<String>,
    country_code: Option<String>,

    // kept verbatim, validated by ApiEnvironment::parse
    api_environment: Option<String>,

    log_obfuscation_enabled: bool,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            merchant_id: None,
            secret_key: None,
            country_code: None,
            api_environment: None,
            log_obfuscation_enabled: true,
        }
    }
}

/// On-disk shape of the config. The api environment is left untyped so a
/// non-string value is reported the same way the setter reports it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSdkConfig {
    merchant_id: Option<String>,
    secret_key: Option<String>,
    country_code: Option<String>,
    api_environment: Option<toml::Value>,
    log_obfuscation_enabled: Option<bool>,
}

impl SdkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawSdkConfig = toml::from_str(content)?;

        let mut config = SdkConfig {
            merchant_id: raw.merchant_id,
            secret_key: raw.secret_key,
            country_code: raw.country_code,
            api_environment: None,
            log_obfuscation_enabled: raw.log_obfuscation_enabled.unwrap_or(true),
        };
        if let Some(value) = raw.api_environment.as_ref() {
            config.set_api_environment_value(value)?;
        }

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            environment = ?config.environment(),
            "loaded SDK config"
        );
        Ok(config)
    }

    pub fn merchant_id(&self) -> Option<&str> {
        self.merchant_id.as_deref()
    }

    pub fn set_merchant_id(&mut self, merchant_id: impl Into<String>) {
        self.merchant_id = Some(merchant_id.into());
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    pub fn set_secret_key(&mut self, secret_key: impl Into<String>) {
        self.secret_key = Some(secret_key.into());
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn set_country_code(&mut self, country_code: impl Into<String>) {
        self.country_code = Some(country_code.into());
    }

    /// The api environment exactly as it was set, e.g. `"Sandbox"`.
    pub fn api_environment(&self) -> Option<&str> {
        self.api_environment.as_deref()
    }

    pub fn environment(&self) -> Option<ApiEnvironment> {
        self.api_environment
            .as_deref()
            .and_then(|v| ApiEnvironment::parse(v).ok())
    }

    /// Stores `value` verbatim once it is known to name an [`ApiEnvironment`].
    /// Nothing is stored on failure.
    pub fn set_api_environment(&mut self, value: &str) -> Result<()> {
        ApiEnvironment::parse(value)?;
        self.api_environment = Some(value.to_string());
        Ok(())
    }

    /// Untyped variant of [`set_api_environment`](Self::set_api_environment)
    /// for values coming out of a config document.
    pub fn set_api_environment_value(&mut self, value: &toml::Value) -> Result<()> {
        match value.as_str() {
            Some(s) => self.set_api_environment(s),
            None => Err(Error::InvalidArgument(format!(
                "Expected string; {} given",
                value.type_str()
            ))),
        }
    }

    pub fn log_obfuscation_enabled(&self) -> bool {
        self.log_obfuscation_enabled
    }

    pub fn set_log_obfuscation_enabled(&mut self, enabled: bool) {
        self.log_obfuscation_enabled = enabled;
    }
}

impl fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkConfig")
            .field("merchant_id", &self.merchant_id)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("country_code", &self.country_code)
            .field("api_environment", &self.api_environment)
            .field("log_obfuscation_enabled", &self.log_obfuscation_enabled)
            .finish()
    }
}
