//! The in-memory cookie jar shared by every bundled store.

use dashmap::DashMap;
use time::OffsetDateTime;
use url::Url;

use crate::cookies::cookie::CanonicalCookie;
use crate::cookies::matching;
use crate::cookies::normalize;

/// Domain-keyed cookie map.
///
/// Cookies are grouped by their canonical domain; within a group, a write
/// replaces any cookie sharing the same name and path. The jar applies no
/// eviction of its own.
pub struct Jar {
    store: DashMap<String, Vec<CanonicalCookie>>,
}

impl Default for Jar {
    fn default() -> Self {
        Self::new()
    }
}

impl Jar {
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Insert a cookie, replacing any existing one with the same name and
    /// path under the same domain.
    pub fn set(&self, cookie: CanonicalCookie) {
        let mut entry = self.store.entry(cookie.domain.clone()).or_default();
        entry.retain(|c| c.name != cookie.name || c.path != cookie.path);
        entry.push(cookie);
    }

    /// Parse a wire line (single cookie or semicolon-joined batch) in the
    /// context of a URL and store every segment that survives parsing.
    pub fn set_from_line(&self, url: &Url, line: &str) -> bool {
        let mut stored = false;
        for segment in normalize::split_cookie_segments(line) {
            if let Some(cookie) = normalize::parse_canonical_segment(url, &segment) {
                self.set(cookie);
                stored = true;
            }
        }
        stored
    }

    /// Cookies matching a URL: domain suffix, path prefix, secure-over-https,
    /// and unexpired. Results are ordered longest path first.
    pub fn cookies_for_url(&self, url: &Url) -> Vec<CanonicalCookie> {
        let host = url.host_str().unwrap_or("");
        let now = OffsetDateTime::now_utc();
        let mut result = Vec::new();

        for domain in Self::matching_domain_keys(host) {
            if let Some(entry) = self.store.get(&domain) {
                for cookie in entry.iter() {
                    if !matching::is_matching_domain(host, &cookie.domain) {
                        continue;
                    }
                    if !matching::path_matches(&cookie.path, url.path()) {
                        continue;
                    }
                    if cookie.secure && url.scheme() != "https" {
                        continue;
                    }
                    if cookie.is_expired(now) {
                        continue;
                    }
                    result.push(cookie.clone());
                }
            }
        }

        result.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.name.cmp(&b.name))
        });

        result
    }

    /// Every cookie in the jar.
    pub fn all(&self) -> Vec<CanonicalCookie> {
        self.store
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect()
    }

    /// Remove cookies named `name` whose domain covers `origin`.
    pub fn remove_named(&self, origin: &str, name: &str) -> bool {
        let mut removed = false;
        for mut entry in self.store.iter_mut() {
            let before = entry.len();
            entry.retain(|c| c.name != name || !matching::is_matching_domain(origin, &c.domain));
            removed |= entry.len() != before;
        }
        removed
    }

    /// Drop everything. Returns whether the jar held any cookie.
    pub fn remove_all(&self) -> bool {
        let removed = self.store.iter().any(|entry| !entry.value().is_empty());
        self.store.clear();
        removed
    }

    /// Drop cookies without an explicit expiry.
    pub fn remove_session(&self) -> bool {
        let mut removed = false;
        for mut entry in self.store.iter_mut() {
            let before = entry.len();
            entry.retain(|c| !c.is_session());
            removed |= entry.len() != before;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.store.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Domain keys to probe for a host: the host itself plus each parent
    /// domain short of the bare TLD.
    fn matching_domain_keys(host: &str) -> Vec<String> {
        let mut domains = vec![host.to_string()];
        let parts: Vec<&str> = host.split('.').collect();
        for i in 1..parts.len().saturating_sub(1) {
            domains.push(parts[i..].join("."));
        }
        domains
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    fn cookie(name: &str, domain: &str, expires: Option<OffsetDateTime>) -> CanonicalCookie {
        CanonicalCookie {
            name: name.to_string(),
            value: "v".to_string(),
            domain: domain.to_string(),
            path: "/".to_string(),
            expires,
            secure: false,
            http_only: false,
            version: None,
        }
    }

    #[test]
    fn test_set_replaces_same_name_and_path() {
        let jar = Jar::new();
        jar.set(cookie("a", "example.com", None));
        jar.set(cookie("a", "example.com", None));
        assert_eq!(jar.len(), 1);
    }

    #[test]
    fn test_subdomain_query_finds_parent_domain_cookie() {
        let jar = Jar::new();
        jar.set(cookie("a", "example.com", None));

        let url = Url::parse("https://sub.example.com/").unwrap();
        let found = jar.cookies_for_url(&url);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "a");
    }

    #[test]
    fn test_lookalike_host_does_not_match() {
        let jar = Jar::new();
        jar.set(cookie("a", "example.com", None));

        let url = Url::parse("https://notexample.com/").unwrap();
        assert!(jar.cookies_for_url(&url).is_empty());
    }

    #[test]
    fn test_expired_cookies_are_filtered() {
        let jar = Jar::new();
        let past = OffsetDateTime::now_utc() - Duration::hours(1);
        jar.set(cookie("gone", "example.com", Some(past)));

        let url = Url::parse("https://example.com/").unwrap();
        assert!(jar.cookies_for_url(&url).is_empty());
        // Still physically present until a removal pass.
        assert_eq!(jar.len(), 1);
    }

    #[test]
    fn test_remove_session_keeps_expiring_cookies() {
        let jar = Jar::new();
        let future = OffsetDateTime::now_utc() + Duration::days(7);
        jar.set(cookie("session", "example.com", None));
        jar.set(cookie("durable", "example.com", Some(future)));

        assert!(jar.remove_session());
        assert_eq!(jar.len(), 1);
        assert_eq!(jar.all()[0].name, "durable");
        // Nothing left to remove on a second pass.
        assert!(!jar.remove_session());
    }

    #[test]
    fn test_remove_named_respects_domain_suffix() {
        let jar = Jar::new();
        jar.set(cookie("token", "example.com", None));
        jar.set(cookie("token", "other.org", None));

        assert!(jar.remove_named("sub.example.com", "token"));
        let remaining = jar.all();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].domain, "other.org");
    }

    #[test]
    fn test_set_from_line_parses_batch() {
        let jar = Jar::new();
        let url = Url::parse("https://example.com/").unwrap();
        assert!(jar.set_from_line(&url, "a=1; b=2; path=/docs"));
        assert_eq!(jar.len(), 2);

        let b = jar
            .all()
            .into_iter()
            .find(|c| c.name == "b")
            .unwrap();
        assert_eq!(b.path, "/docs");
        assert_eq!(b.domain, "example.com");
    }
}
