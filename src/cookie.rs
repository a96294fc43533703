//! Client-side cookie records and the store they live in
//!
//! [`StoredCookie`] mirrors the record kept by a classic HTTP client cookie
//! jar, including the `*_specified` flags that record which attributes the
//! server actually sent. Those flags are derived by [`StoredCookieBuilder`]
//! and cannot be set independently.

use crate::config::DEFAULT_COOKIE_PATH;

/// Represents a cookie held by an HTTP client cookie store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub domain_specified: bool,
    pub domain_initial_dot: bool,
    pub path: String,
    pub path_specified: bool,
    /// Port restrictions are not modelled; always `None`.
    pub port: Option<String>,
    pub port_specified: bool,
    pub secure: bool,
    /// Expiry in Unix seconds. `None` is a session cookie.
    pub expires: Option<i64>,
    pub discard: bool,
    pub comment: Option<String>,
    /// Whether a comment is present. Historically named after the
    /// `CommentURL` attribute, but only ever a flag.
    pub comment_url: bool,
    /// Non-standard `HttpOnly` extension attribute.
    ///
    /// `None` means the attribute was never set, which is distinct from an
    /// explicit `Some(false)`.
    pub http_only: Option<bool>,
    pub rfc2109: bool,
    pub version: i64,
}

impl StoredCookie {
    /// Start building a cookie with the given name and value.
    pub fn builder(name: impl Into<String>, value: impl Into<String>) -> StoredCookieBuilder {
        StoredCookieBuilder::new(name, value)
    }

    /// A cookie without expiry lives only as long as the client session.
    pub fn is_session(&self) -> bool {
        self.expires.is_none()
    }

    pub fn is_expired_at(&self, now_unix_secs: i64) -> bool {
        match self.expires {
            Some(expires) => expires <= now_unix_secs,
            None => false,
        }
    }

    /// Identity used by stores for replace-on-match.
    pub fn matches(&self, domain: &str, path: &str, name: &str) -> bool {
        self.domain == domain && self.path == path && self.name == name
    }
}

/// Builder for [`StoredCookie`]
#[derive(Debug, Clone)]
pub struct StoredCookieBuilder {
    name: String,
    value: String,
    domain: String,
    path: String,
    secure: bool,
    expires: Option<i64>,
    comment: Option<String>,
    http_only: Option<bool>,
    version: i64,
}

impl StoredCookieBuilder {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: String::new(),
            path: DEFAULT_COOKIE_PATH.to_string(),
            secure: false,
            expires: None,
            comment: None,
            http_only: None,
            version: 0,
        }
    }

    /// Set the cookie domain. An empty domain leaves it unspecified.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn expires(mut self, expires: Option<i64>) -> Self {
        self.expires = expires;
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn http_only(mut self, http_only: Option<bool>) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    /// Finish the cookie, deriving the `*_specified` flags.
    pub fn build(self) -> StoredCookie {
        let domain_specified = !self.domain.is_empty();
        let domain_initial_dot = self.domain.starts_with('.');
        let path_specified = !self.path.is_empty();
        let comment_url = self.comment.as_deref().is_some_and(|c| !c.is_empty());

        StoredCookie {
            name: self.name,
            value: self.value,
            domain: self.domain,
            domain_specified,
            domain_initial_dot,
            path: self.path,
            path_specified,
            port: None,
            port_specified: false,
            secure: self.secure,
            expires: self.expires,
            discard: false,
            comment: self.comment,
            comment_url,
            http_only: self.http_only,
            rfc2109: false,
            version: self.version,
        }
    }
}

/// A cookie store that HAR cookies can be exported from and imported into
pub trait CookieStore {
    /// All cookies currently held, in the store's own order.
    fn cookies(&self) -> impl Iterator<Item = &StoredCookie>;

    /// Insert a cookie, replacing any existing cookie with the same identity.
    fn set_cookie(&mut self, cookie: StoredCookie);
}

/// In-memory cookie store keeping insertion order
///
/// Setting a cookie whose (domain, path, name) is already present replaces
/// the old cookie in place, so it keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: Vec<StoredCookie>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoredCookie> {
        self.cookies.iter()
    }

    /// Look up a cookie by its identity
    pub fn get(&self, domain: &str, path: &str, name: &str) -> Option<&StoredCookie> {
        self.cookies.iter().find(|c| c.matches(domain, path, name))
    }

    /// Remove a cookie by its identity, returning it if present
    pub fn remove(&mut self, domain: &str, path: &str, name: &str) -> Option<StoredCookie> {
        let index = self
            .cookies
            .iter()
            .position(|c| c.matches(domain, path, name))?;
        Some(self.cookies.remove(index))
    }

    pub fn clear(&mut self) {
        self.cookies.clear();
    }

    /// Drop every cookie that has expired at `now_unix_secs`. Returns how many were removed.
    pub fn clear_expired(&mut self, now_unix_secs: i64) -> usize {
        let before = self.cookies.len();
        self.cookies.retain(|c| !c.is_expired_at(now_unix_secs));
        let removed = before - self.cookies.len();
        if removed > 0 {
            log::debug!("Cleared {} expired cookies", removed);
        }
        removed
    }
}

impl CookieStore for CookieJar {
    fn cookies(&self) -> impl Iterator<Item = &StoredCookie> {
        self.cookies.iter()
    }

    fn set_cookie(&mut self, cookie: StoredCookie) {
        match self
            .cookies
            .iter_mut()
            .find(|c| c.matches(&cookie.domain, &cookie.path, &cookie.name))
        {
            Some(existing) => {
                log::debug!(
                    "Replacing cookie {} for domain {:?} path {:?}",
                    cookie.name,
                    cookie.domain,
                    cookie.path
                );
                *existing = cookie;
            }
            None => self.cookies.push(cookie),
        }
    }
}

impl Extend<StoredCookie> for CookieJar {
    fn extend<I: IntoIterator<Item = StoredCookie>>(&mut self, iter: I) {
        for cookie in iter {
            self.set_cookie(cookie);
        }
    }
}

impl FromIterator<StoredCookie> for CookieJar {
    fn from_iter<I: IntoIterator<Item = StoredCookie>>(iter: I) -> Self {
        let mut jar = CookieJar::new();
        jar.extend(iter);
        jar
    }
}

impl<'a> IntoIterator for &'a CookieJar {
    type Item = &'a StoredCookie;
    type IntoIter = std::slice::Iter<'a, StoredCookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}
