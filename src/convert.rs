//! Conversion between stored cookies and HAR cookies
//!
//! `cookie_to_har` writes only what the stored cookie actually specifies, so
//! its output is sparse. `har_to_cookie` fills in the defaults a cookie jar
//! expects. The two are inverse for every field HAR can express, with
//! `version` as the exception: it is read from HAR but only written back when
//! [`ConversionConfig::emit_version`] is enabled.

use crate::config::{ConversionConfig, DEFAULT_COOKIE_PATH};
use crate::cookie::{CookieStore, StoredCookie};
use crate::error::{HarJarError, Result};
use crate::har::{HarCookie, HarExpires};
use crate::timestamp::format_har_timestamp;

/// Converts cookies between a [`CookieStore`] and HAR records
#[derive(Debug, Clone, Default)]
pub struct HarCookieConverter {
    config: ConversionConfig,
}

impl HarCookieConverter {
    /// Create a converter with the given configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert a HAR cookie into a stored cookie.
    ///
    /// Fails if `name` or `value` is missing, or if `expires` is a string
    /// that is not a `YYYY-MM-DDTHH:MM:SSZ` timestamp.
    pub fn har_to_cookie(&self, har: &HarCookie) -> Result<StoredCookie> {
        let name = har.name.as_deref().ok_or(HarJarError::MissingField("name"))?;
        let value = har
            .value
            .as_deref()
            .ok_or(HarJarError::MissingField("value"))?;
        let expires = match &har.expires {
            Some(expires) => expires.to_unix()?,
            None => None,
        };
        let path = har
            .path
            .clone()
            .unwrap_or_else(|| DEFAULT_COOKIE_PATH.to_string());

        let cookie = StoredCookie::builder(name, value)
            .version(har.version.unwrap_or(0))
            .domain(har.domain.clone().unwrap_or_default())
            .path(path)
            .secure(har.secure.unwrap_or(false))
            .expires(expires)
            .comment(har.comment.clone())
            .http_only(har.http_only)
            .build();

        log::debug!(
            "Converted HAR cookie {} (domain {:?}, path {:?})",
            cookie.name,
            cookie.domain,
            cookie.path
        );
        Ok(cookie)
    }

    /// Convert a stored cookie into a HAR cookie.
    pub fn cookie_to_har(&self, cookie: &StoredCookie) -> HarCookie {
        let mut har =
            HarCookie::new(cookie.name.as_str(), cookie.value.as_str()).with_secure(cookie.secure);

        if cookie.path_specified {
            har.path = Some(cookie.path.clone());
        }
        if cookie.domain_specified {
            har.domain = Some(cookie.domain.clone());
        }
        if let Some(expires) = cookie.expires.filter(|&secs| secs != 0) {
            match format_har_timestamp(expires) {
                Some(text) => har.expires = Some(HarExpires::DateTime(text)),
                None => log::warn!(
                    "Dropping expiry of cookie {}: {} is outside the HAR date range",
                    cookie.name,
                    expires
                ),
            }
        }
        har.http_only = cookie.http_only;
        if let Some(comment) = cookie.comment.as_deref().filter(|c| !c.is_empty()) {
            har.comment = Some(comment.to_string());
        }
        if self.config.emit_version && cookie.version != 0 {
            har.version = Some(cookie.version);
        }

        har
    }

    /// Convert every cookie in a store, in store order.
    pub fn jar_to_har<S: CookieStore>(&self, store: &S) -> Vec<HarCookie> {
        store
            .cookies()
            .map(|cookie| self.cookie_to_har(cookie))
            .collect()
    }

    /// Add HAR cookies to a store, in order.
    ///
    /// Stops at the first cookie that fails to convert. Cookies set before
    /// the failure stay in the store.
    pub fn har_to_jar<'a, S, I>(&self, store: &mut S, har_cookies: I) -> Result<()>
    where
        S: CookieStore,
        I: IntoIterator<Item = &'a HarCookie>,
    {
        let mut added = 0usize;
        for har in har_cookies {
            store.set_cookie(self.har_to_cookie(har)?);
            added += 1;
        }
        log::debug!("Set {} cookies from HAR", added);
        Ok(())
    }
}

/// Convert a HAR cookie into a stored cookie using the default configuration.
pub fn har_to_cookie(har: &HarCookie) -> Result<StoredCookie> {
    HarCookieConverter::default().har_to_cookie(har)
}

/// Convert a stored cookie into a HAR cookie using the default configuration.
pub fn cookie_to_har(cookie: &StoredCookie) -> HarCookie {
    HarCookieConverter::default().cookie_to_har(cookie)
}

/// Convert every cookie in a store into HAR format.
pub fn jar_to_har<S: CookieStore>(store: &S) -> Vec<HarCookie> {
    HarCookieConverter::default().jar_to_har(store)
}

/// Add HAR cookies to a store.
pub fn har_to_jar<'a, S, I>(store: &mut S, har_cookies: I) -> Result<()>
where
    S: CookieStore,
    I: IntoIterator<Item = &'a HarCookie>,
{
    HarCookieConverter::default().har_to_jar(store, har_cookies)
}

impl TryFrom<&HarCookie> for StoredCookie {
    type Error = HarJarError;

    fn try_from(har: &HarCookie) -> Result<Self> {
        har_to_cookie(har)
    }
}

impl From<&StoredCookie> for HarCookie {
    fn from(cookie: &StoredCookie) -> Self {
        cookie_to_har(cookie)
    }
}

#[cfg(test)]
mod tests;
