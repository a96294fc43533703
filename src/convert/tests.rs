use super::{cookie_to_har, har_to_cookie, har_to_jar, jar_to_har, HarCookieConverter};
use crate::config::ConversionConfig;
use crate::cookie::{CookieJar, CookieStore, StoredCookie};
use crate::error::HarJarError;
use crate::har::{HarCookie, HarExpires};

fn full_har_cookie() -> HarCookie {
    HarCookie::new("TestCookie", "Cookie Value")
        .with_path("/foo")
        .with_domain("www.janodvarko.cz")
        .with_expires(HarExpires::DateTime("2009-07-24T19:20:30Z".to_string()))
        .with_http_only(true)
        .with_secure(true)
        .with_comment("this is a test")
}

#[test]
fn har_to_cookie_maps_every_field() {
    let cookie = har_to_cookie(&full_har_cookie()).expect("convert");
    assert_eq!(cookie.name, "TestCookie");
    assert_eq!(cookie.value, "Cookie Value");
    assert_eq!(cookie.port, None);
    assert!(!cookie.port_specified);
    assert_eq!(cookie.domain, "www.janodvarko.cz");
    assert!(cookie.domain_specified);
    assert!(!cookie.domain_initial_dot);
    assert_eq!(cookie.path, "/foo");
    assert!(cookie.path_specified);
    assert!(cookie.secure);
    assert_eq!(cookie.expires, Some(1_248_463_230));
    assert!(!cookie.discard);
    assert_eq!(cookie.comment.as_deref(), Some("this is a test"));
    assert!(cookie.comment_url);
    assert_eq!(cookie.http_only, Some(true));
    assert!(!cookie.rfc2109);
    assert_eq!(cookie.version, 0);
}

#[test]
fn har_to_cookie_applies_defaults() {
    let cookie = har_to_cookie(&HarCookie::new("a", "1")).expect("convert");
    assert_eq!(cookie.domain, "");
    assert!(!cookie.domain_specified);
    assert_eq!(cookie.path, "/");
    assert!(cookie.path_specified);
    assert!(!cookie.secure);
    assert!(cookie.is_session());
    assert_eq!(cookie.comment, None);
    assert!(!cookie.comment_url);
    assert_eq!(cookie.http_only, None);
}

#[test]
fn har_to_cookie_reads_version() {
    let cookie = har_to_cookie(&HarCookie::new("a", "1").with_version(1)).expect("convert");
    assert_eq!(cookie.version, 1);
}

#[test]
fn har_to_cookie_requires_name_and_value() {
    let mut har = HarCookie::new("a", "1");
    har.name = None;
    let err = har_to_cookie(&har).expect_err("missing name");
    assert!(matches!(err, HarJarError::MissingField("name")));

    let mut har = HarCookie::new("a", "1");
    har.value = None;
    let err = har_to_cookie(&har).expect_err("missing value");
    assert!(matches!(err, HarJarError::MissingField("value")));
}

#[test]
fn har_to_cookie_rejects_bad_timestamp() {
    let har = HarCookie::new("a", "1").with_expires(HarExpires::DateTime("not-a-date".into()));
    let err = har_to_cookie(&har).expect_err("bad timestamp");
    assert!(matches!(err, HarJarError::InvalidTimestamp(_)));
}

#[test]
fn converter_always_defaults_path_to_root() {
    let converter = HarCookieConverter::new(ConversionConfig { emit_version: true });
    let cookie = converter
        .har_to_cookie(&HarCookie::new("a", "1"))
        .expect("convert");
    assert_eq!(cookie.path, "/");
    assert!(cookie.path_specified);
}

#[test]
fn cookie_to_har_is_sparse() {
    let cookie = StoredCookie::builder("a", "1").path("").build();
    let har = cookie_to_har(&cookie);
    assert_eq!(har, HarCookie::new("a", "1").with_secure(false));
}

#[test]
fn cookie_to_har_writes_specified_fields() {
    let cookie = har_to_cookie(&full_har_cookie()).expect("convert");
    assert_eq!(cookie_to_har(&cookie), full_har_cookie());
}

#[test]
fn cookie_to_har_keeps_explicit_false_http_only() {
    let cookie = StoredCookie::builder("a", "1").http_only(Some(false)).build();
    assert_eq!(cookie_to_har(&cookie).http_only, Some(false));

    let cookie = StoredCookie::builder("a", "1").build();
    assert_eq!(cookie_to_har(&cookie).http_only, None);
}

#[test]
fn cookie_to_har_omits_zero_expiry_and_empty_comment() {
    let cookie = StoredCookie::builder("a", "1")
        .expires(Some(0))
        .comment(Some(String::new()))
        .build();
    let har = cookie_to_har(&cookie);
    assert_eq!(har.expires, None);
    assert_eq!(har.comment, None);
}

#[test]
fn cookie_to_har_drops_unrenderable_expiry() {
    let cookie = StoredCookie::builder("a", "1").expires(Some(i64::MAX)).build();
    assert_eq!(cookie_to_har(&cookie).expires, None);
}

#[test]
fn cookie_to_har_emits_version_only_when_configured() {
    let cookie = StoredCookie::builder("a", "1").version(1).build();
    assert_eq!(cookie_to_har(&cookie).version, None);

    let converter = HarCookieConverter::new(ConversionConfig { emit_version: true });
    assert_eq!(converter.cookie_to_har(&cookie).version, Some(1));

    let unversioned = StoredCookie::builder("a", "1").build();
    assert_eq!(converter.cookie_to_har(&unversioned).version, None);
}

#[test]
fn jar_to_har_preserves_store_order() {
    let mut jar = CookieJar::new();
    assert!(jar_to_har(&jar).is_empty());

    jar.set_cookie(StoredCookie::builder("z", "1").build());
    jar.set_cookie(StoredCookie::builder("a", "2").build());
    let names: Vec<_> = jar_to_har(&jar)
        .into_iter()
        .map(|har| har.name.expect("name"))
        .collect();
    assert_eq!(names, ["z", "a"]);
}

#[test]
fn har_to_jar_stops_at_first_error_without_rollback() {
    let mut missing_value = HarCookie::new("bad", "x");
    missing_value.value = None;
    let cookies = vec![
        HarCookie::new("first", "1"),
        missing_value,
        HarCookie::new("never", "3"),
    ];

    let mut jar = CookieJar::new();
    let err = har_to_jar(&mut jar, &cookies).expect_err("second cookie fails");
    assert!(matches!(err, HarJarError::MissingField("value")));
    assert_eq!(jar.len(), 1);
    assert!(jar.get("", "/", "first").is_some());
    assert!(jar.get("", "/", "never").is_none());
}

#[test]
fn har_to_jar_lets_later_entries_win() {
    let cookies = [
        HarCookie::new("a", "old").with_domain("example.com"),
        HarCookie::new("a", "new").with_domain("example.com"),
    ];
    let mut jar = CookieJar::new();
    har_to_jar(&mut jar, &cookies).expect("import");
    assert_eq!(jar.len(), 1);
    assert_eq!(
        jar.get("example.com", "/", "a").map(|c| c.value.as_str()),
        Some("new")
    );
}

#[test]
fn conversion_traits_match_free_functions() {
    let har = full_har_cookie();
    let cookie = StoredCookie::try_from(&har).expect("convert");
    assert_eq!(HarCookie::from(&cookie), har);
}
