//! HAR cookie records
//!
//! Models the cookie object of the HTTP Archive format as it appears in
//! `request.cookies` / `response.cookies`. Every field is optional on the
//! wire so that incomplete records can be decoded and then rejected with a
//! precise error during conversion. Absent fields are not serialized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::timestamp::parse_har_timestamp;

/// A cookie in HAR format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarCookie {
    /// Required by HAR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required by HAR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<HarExpires>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// The `expires` field of a HAR cookie
///
/// HAR producers write either Unix seconds or a UTC date string. An integer
/// that does not fit in `i64` (or any other JSON type) matches neither form
/// and is reported as [`HarJarError::Json`](crate::error::HarJarError::Json)
/// when decoding, before any timestamp resolution happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HarExpires {
    Timestamp(i64),
    DateTime(String),
}

impl HarExpires {
    /// Resolve to Unix seconds. `0` and `""` mean "no expiry".
    pub fn to_unix(&self) -> Result<Option<i64>> {
        match self {
            HarExpires::Timestamp(0) => Ok(None),
            HarExpires::Timestamp(secs) => Ok(Some(*secs)),
            HarExpires::DateTime(text) if text.is_empty() => Ok(None),
            HarExpires::DateTime(text) => parse_har_timestamp(text).map(Some),
        }
    }
}

impl HarCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        HarCookie {
            name: Some(name.into()),
            value: Some(value.into()),
            ..HarCookie::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_expires(mut self, expires: HarExpires) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = Some(http_only);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }
}

/// Decode a JSON array of HAR cookie objects.
pub fn from_json_str(input: &str) -> Result<Vec<HarCookie>> {
    Ok(serde_json::from_str(input)?)
}

/// Decode HAR cookies from an already parsed JSON array, e.g. the
/// `cookies` member of a HAR request.
pub fn from_value(value: Value) -> Result<Vec<HarCookie>> {
    Ok(serde_json::from_value(value)?)
}

/// Render HAR cookies as a pretty-printed JSON array.
pub fn to_json_string(cookies: &[HarCookie]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cookies)?)
}
