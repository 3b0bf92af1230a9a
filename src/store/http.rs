//! The process-wide HTTP cookie store.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use crate::base::error::BridgeError;
use crate::cookies::cookie::CanonicalCookie;
use crate::store::{jar::Jar, persistence, CookieStore};

/// Default cookie store: a full-capability jar with optional JSON persistence.
///
/// When constructed with [`HttpCookieStore::with_persistence`], previously
/// saved cookies are loaded at construction and [`CookieStore::flush`] writes
/// the jar back to the same path.
pub struct HttpCookieStore {
    jar: Jar,
    persist_path: Option<PathBuf>,
}

impl Default for HttpCookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpCookieStore {
    pub fn new() -> Self {
        Self {
            jar: Jar::new(),
            persist_path: None,
        }
    }

    /// Back the store with a JSON file, loading whatever it already holds.
    pub fn with_persistence(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let jar = Jar::new();

        match persistence::load_cookies(&path) {
            Ok(cookies) => {
                for cookie in cookies {
                    jar.set(cookie);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load persisted cookies");
            }
        }

        Self {
            jar,
            persist_path: Some(path),
        }
    }
}

#[async_trait]
impl CookieStore for HttpCookieStore {
    async fn set_cookie_line(&self, url: &Url, line: &str) -> Result<bool, BridgeError> {
        Ok(self.jar.set_from_line(url, line))
    }

    async fn cookies_for_url(&self, url: &Url) -> Result<Vec<CanonicalCookie>, BridgeError> {
        Ok(self.jar.cookies_for_url(url))
    }

    async fn all_cookies(&self) -> Result<Vec<CanonicalCookie>, BridgeError> {
        Ok(self.jar.all())
    }

    async fn remove_named(&self, origin: &str, name: &str) -> Result<bool, BridgeError> {
        Ok(self.jar.remove_named(origin, name))
    }

    async fn remove_all(&self) -> Result<bool, BridgeError> {
        Ok(self.jar.remove_all())
    }

    async fn remove_session_cookies(&self) -> Result<bool, BridgeError> {
        Ok(self.jar.remove_session())
    }

    fn flush(&self) {
        if let Some(path) = &self.persist_path {
            if let Err(e) = persistence::save_cookies(&self.jar.all(), path) {
                tracing::warn!(path = %path.display(), error = %e, "cookie flush failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_flush_then_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        let url = Url::parse("https://example.com/").unwrap();

        let store = HttpCookieStore::with_persistence(&path);
        store.set_cookie_line(&url, "token=abc; path=/").await.unwrap();
        store.flush();

        let reloaded = HttpCookieStore::with_persistence(&path);
        let cookies = reloaded.cookies_for_url(&url).await.unwrap();
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "token");
        assert_eq!(cookies[0].value, "abc");
    }
}
