//! harjar - HTTP client cookie stores to and from HAR cookies
//!
//! This crate converts between the cookie records an HTTP client keeps in
//! its cookie jar and the cookie objects of the HAR (HTTP Archive) format,
//! so that cookie state can be exchanged with tools that read or write HAR.

pub mod config;
pub mod convert;
pub mod cookie;
pub mod error;
pub mod har;
pub mod logging;
pub mod timestamp;

pub use convert::{cookie_to_har, har_to_cookie, har_to_jar, jar_to_har, HarCookieConverter};
pub use cookie::{CookieJar, CookieStore, StoredCookie};
pub use error::{HarJarError, Result};
pub use har::{HarCookie, HarExpires};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
