//! A system-webview-style store with a reduced API surface.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use crate::base::error::BridgeError;
use crate::cookies::cookie::CanonicalCookie;
use crate::store::{jar::Jar, persistence, CookieStore};

/// Cookie store modeling a system webview jar.
///
/// That class of store accepts cookie lines and answers per-URL queries, but
/// exposes no enumerate-all primitive and no per-cookie-by-name removal, so
/// `all_cookies` and `remove_named` keep the trait's `NotSupported` defaults.
/// Wire it in as the system store when the host platform has these gaps.
pub struct WebViewCookieStore {
    jar: Jar,
    persist_path: Option<PathBuf>,
}

impl Default for WebViewCookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WebViewCookieStore {
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
impl CookieStore for WebViewCookieStore {
    async fn set_cookie_line(&self, url: &Url, line: &str) -> Result<bool, BridgeError> {
        Ok(self.jar.set_from_line(url, line))
    }

    async fn cookies_for_url(&self, url: &Url) -> Result<Vec<CanonicalCookie>, BridgeError> {
        Ok(self.jar.cookies_for_url(url))
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
