//! The web-engine-isolated cookie store.

use async_trait::async_trait;
use url::Url;

use crate::base::error::BridgeError;
use crate::cookies::cookie::CanonicalCookie;
use crate::store::{jar::Jar, CookieStore};

/// Cookie store modeling an embedded web engine's isolated jar.
///
/// Distinct from [`HttpCookieStore`](crate::store::HttpCookieStore): the two
/// never share cookies. The engine persists its jar itself, so `flush` is a
/// no-op here.
pub struct WebKitCookieStore {
    jar: Jar,
}

impl Default for WebKitCookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WebKitCookieStore {
    pub fn new() -> Self {
        Self { jar: Jar::new() }
    }
}

#[async_trait]
impl CookieStore for WebKitCookieStore {
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
        tracing::debug!("webkit store persists automatically; flush is a no-op");
    }
}
