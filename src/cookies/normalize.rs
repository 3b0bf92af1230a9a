//! Cookie normalization, validation, and wire-format codec.
//!
//! The write path runs [`normalize`] before anything reaches a store: URL and
//! required-field validation, the domain containment check, defaults for
//! `path` and `domain`, and expiry parsing. [`to_cookie_line`] then produces
//! the RFC 6265 wire form a store consumes. The read path uses
//! [`parse_cookie_header`] to decode `Set-Cookie`-style strings (single lines
//! or semicolon-joined batches) back into an attribute collection.

use time::OffsetDateTime;
use url::Url;

use crate::base::error::BridgeError;
use crate::cookies::cookie::{CanonicalCookie, Cookie, CookieCollection};
use crate::cookies::date;

/// Parse a target URL, requiring a scheme and a non-empty host.
pub fn parse_target_url(target: &str) -> Result<Url, BridgeError> {
    let url = Url::parse(target).map_err(|_| BridgeError::InvalidUrl)?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(BridgeError::InvalidUrl),
    }
}

/// Validate a proposed cookie against a target URL and fill defaults.
///
/// See [`normalize_in`] for the rules; this wrapper parses the URL first.
pub fn normalize(target_url: &str, attrs: &Cookie) -> Result<CanonicalCookie, BridgeError> {
    let url = parse_target_url(target_url)?;
    normalize_in(&url, attrs)
}

/// Validate a proposed cookie against an already-parsed target URL.
///
/// Rules:
/// - `name` and `value` must be non-empty.
/// - An explicit domain is stripped of one leading dot, lowercased, and must
///   be contained in the URL host or equal it. This containment check is
///   looser than the read-side predicate in
///   [`matching`](crate::cookies::matching) (host `notexample.com` accepts
///   domain `example.com`); both behaviors are kept as-is per call site.
/// - `path` defaults to `/`, `domain` to the URL host.
/// - An unparsable `expires` value is dropped, not an error.
pub fn normalize_in(url: &Url, attrs: &Cookie) -> Result<CanonicalCookie, BridgeError> {
    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(BridgeError::InvalidUrl),
    };

    if attrs.name.is_empty() || attrs.value.is_empty() {
        return Err(BridgeError::InvalidCookieValues);
    }

    let domain = match attrs.domain.as_deref().filter(|d| !d.is_empty()) {
        Some(given) => {
            let stripped = given.strip_prefix('.').unwrap_or(given).to_ascii_lowercase();
            if !host.contains(&stripped) && host != stripped {
                return Err(BridgeError::domain_mismatch(host, stripped));
            }
            stripped
        }
        None => host.to_ascii_lowercase(),
    };

    let path = attrs
        .path
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or("/")
        .to_string();

    let expires = attrs.expires.as_deref().and_then(date::parse_expiry);

    Ok(CanonicalCookie {
        name: attrs.name.clone(),
        value: attrs.value.clone(),
        domain,
        path,
        expires,
        secure: attrs.secure.unwrap_or(false),
        http_only: attrs.http_only.unwrap_or(false),
        version: attrs.version.clone(),
    })
}

/// Encode a validated cookie as an RFC 6265 wire line.
///
/// `name=value[; expires=<RFC1123>][; domain=d][; path=p][; secure][; httponly]`.
/// The `expires` attribute is emitted only while the cookie is still live.
pub fn to_cookie_line(cookie: &CanonicalCookie) -> String {
    let mut line = format!("{}={}", cookie.name, cookie.value);

    if !cookie.is_expired(OffsetDateTime::now_utc()) {
        if let Some(formatted) = cookie.expires.and_then(date::format_rfc1123) {
            line.push_str("; expires=");
            line.push_str(&formatted);
        }
    }

    if !cookie.domain.is_empty() {
        line.push_str("; domain=");
        line.push_str(&cookie.domain);
    }

    if !cookie.path.is_empty() {
        line.push_str("; path=");
        line.push_str(&cookie.path);
    }

    if cookie.secure {
        line.push_str("; secure");
    }

    if cookie.http_only {
        line.push_str("; httponly");
    }

    line
}

/// Attribute keywords that attach to the preceding cookie segment rather than
/// starting a new one.
fn is_attribute_piece(piece: &str) -> bool {
    let key = piece.split('=').next().unwrap_or("").trim();
    matches!(
        key.to_ascii_lowercase().as_str(),
        "expires" | "domain" | "path" | "max-age" | "samesite" | "secure" | "httponly" | "version"
    )
}

/// Split a raw cookie string into per-cookie segments.
///
/// The input grammar is forgiving: a single `Set-Cookie` line, or several
/// cookies joined by semicolons. Pieces naming a known attribute are
/// reattached to the cookie before them, so `a=1; path=/; b=2` yields the
/// segments `a=1; path=/` and `b=2`.
pub fn split_cookie_segments(raw: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();

    for piece in raw.split(';') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        match segments.last_mut() {
            Some(current) if is_attribute_piece(piece) => {
                current.push_str("; ");
                current.push_str(piece);
            }
            _ => segments.push(piece.to_string()),
        }
    }

    segments
}

/// Parse one cookie segment into its canonical form, in the context of the
/// URL it arrived from.
///
/// Segments with an empty name or value are skipped, as are segments the
/// cookie grammar rejects outright. A `max-age` attribute takes precedence
/// over `expires`, both mapping onto the typed expiry.
pub fn parse_canonical_segment(url: &Url, segment: &str) -> Option<CanonicalCookie> {
    let parsed = match cookie::Cookie::parse(segment.to_owned()) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "skipping unparsable cookie segment");
            return None;
        }
    };

    if parsed.name().is_empty() || parsed.value().is_empty() {
        tracing::debug!("skipping cookie segment with empty name or value");
        return None;
    }

    let host = url.host_str().unwrap_or("");
    let domain = parsed
        .domain()
        .map(|d| d.trim_start_matches('.').to_ascii_lowercase())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| host.to_ascii_lowercase());

    let path = parsed
        .path()
        .filter(|p| !p.is_empty())
        .unwrap_or("/")
        .to_string();

    let expires = parsed
        .max_age()
        .map(|age| OffsetDateTime::now_utc() + age)
        .or_else(|| parsed.expires_datetime());

    Some(CanonicalCookie {
        name: parsed.name().to_string(),
        value: parsed.value().to_string(),
        domain,
        path,
        expires,
        secure: parsed.secure().unwrap_or(false),
        http_only: parsed.http_only().unwrap_or(false),
        version: None,
    })
}

/// Decode a raw cookie string into a name-keyed collection.
///
/// Accepts a `Set-Cookie` line or a semicolon-joined batch; segments with an
/// empty name or value are dropped silently.
pub fn parse_cookie_header(raw: &str) -> CookieCollection {
    let mut cookies = CookieCollection::new();

    for segment in split_cookie_segments(raw) {
        let parsed = match cookie::Cookie::parse(segment) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unparsable cookie segment");
                continue;
            }
        };

        if parsed.name().is_empty() || parsed.value().is_empty() {
            continue;
        }

        cookies.insert(
            parsed.name().to_string(),
            Cookie {
                name: parsed.name().to_string(),
                value: parsed.value().to_string(),
                domain: parsed
                    .domain()
                    .map(|d| d.trim_start_matches('.').to_string()),
                path: parsed.path().map(str::to_string),
                expires: parsed.expires_datetime().and_then(date::format_expiry),
                secure: parsed.secure(),
                http_only: parsed.http_only(),
                version: None,
            },
        );
    }

    cookies
}
