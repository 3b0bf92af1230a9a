//! Read-side domain and path predicates.

/// Check if a stored cookie's domain covers the origin host.
///
/// Exact match, or the origin ends with `"." + cookie_domain` (a proper
/// dot-suffix: `sub.example.com` matches `example.com`, `notexample.com` does
/// not). A leading dot on the stored domain is tolerated.
pub fn is_matching_domain(origin: &str, cookie_domain: &str) -> bool {
    let cookie_domain = cookie_domain.trim_start_matches('.');

    if origin.eq_ignore_ascii_case(cookie_domain) {
        return true;
    }

    let origin = origin.to_ascii_lowercase();
    let suffix = format!(".{}", cookie_domain.to_ascii_lowercase());
    origin.ends_with(&suffix)
}

/// Check if a request path falls under a cookie path, per RFC 6265.
pub fn path_matches(cookie_path: &str, request_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }

    if request_path.starts_with(cookie_path) {
        if cookie_path.ends_with('/') {
            return true;
        }
        // The prefix must end at a path-segment boundary.
        return request_path.chars().nth(cookie_path.len()) == Some('/');
    }

    false
}
