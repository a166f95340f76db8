//! Redaction of credentials and consumer details in raw HTTP text.
//!
//! Every raw message goes through [`maybe_obfuscate`] before it reaches a log
//! sink. The passes are independent text substitutions applied in a fixed
//! order, each one to the output of the previous:
//!
//! 1. [`mask_basic_auth`] merchant API credentials
//! 2. [`mask_user_agent_version`] merchant id in the User-Agent
//! 3. [`mask_pii_fields`] consumer and contact attributes in JSON bodies

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::SdkConfig;

static BASIC_AUTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(Authorization: Basic )(.{3})(.*)(\S{3})").unwrap());

static USER_AGENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(User-Agent:.*Merchant/)([0-9a-zA-Z]+)(.*)").unwrap());

static PII_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(")(phoneNumber|givenNames|surname|email|name|line[12]|area[12]|region|postcode)(":")([^"]+)(")"#,
    )
    .unwrap()
});

fn stars(s: &str) -> String {
    "*".repeat(s.chars().count())
}

/// Masks a basic-auth token, keeping its first and last three characters.
///
/// Tokens shorter than six characters are left alone.
pub fn mask_basic_auth(raw: &str) -> Cow<'_, str> {
    BASIC_AUTH.replace_all(raw, |caps: &Captures| {
        format!("{}{}{}{}", &caps[1], &caps[2], stars(&caps[3]), &caps[4])
    })
}

pub fn mask_user_agent_version(raw: &str) -> Cow<'_, str> {
    USER_AGENT.replace_all(raw, |caps: &Captures| {
        format!("{}{}{}", &caps[1], stars(&caps[2]), &caps[3])
    })
}

/// Masks every non-whitespace character of the quoted value of known
/// personal fields, e.g. `"email":"a@b.com"` becomes `"email":"*******"`.
pub fn mask_pii_fields(raw: &str) -> Cow<'_, str> {
    PII_FIELD.replace_all(raw, |caps: &Captures| {
        let masked: String = caps[4]
            .chars()
            .map(|c| if c.is_whitespace() { c } else { '*' })
            .collect();
        format!("{}{}{}{}{}", &caps[1], &caps[2], &caps[3], masked, &caps[5])
    })
}

/// Runs all passes unconditionally.
pub fn obfuscate(raw: &str) -> String {
    let masked = mask_basic_auth(raw);
    let masked = mask_user_agent_version(&masked).into_owned();
    mask_pii_fields(&masked).into_owned()
}

/// Obfuscates `raw` unless the config turned log obfuscation off.
pub fn maybe_obfuscate<'a>(config: &SdkConfig, raw: &'a str) -> Cow<'a, str> {
    if !config.log_obfuscation_enabled() {
        return Cow::Borrowed(raw);
    }

    Cow::Owned(obfuscate(raw))
}
