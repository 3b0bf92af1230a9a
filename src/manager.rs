//! The cookie gateway: a typed async surface over the stores.
//!
//! Every operation validates its input, delegates to the store selected by
//! the `use_web_kit` flag, and shapes the store's answer for the host. The
//! gateway keeps no cookie state of its own; the stores are the only owners.
//!
//! # Example
//!
//! ```rust,no_run
//! use cookiebridge::{Cookie, CookieManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cookiebridge::BridgeError> {
//!     let manager = CookieManager::new();
//!
//!     let mut cookie = Cookie::new("session", "abc123");
//!     cookie.secure = Some(true);
//!     manager.set_cookie("https://example.com", &cookie, false).await?;
//!
//!     let cookies = manager.get_cookies("https://example.com", false).await?;
//!     println!("{} cookie(s)", cookies.len());
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::base::error::BridgeError;
use crate::cookies::cookie::{Cookie, CookieCollection};
use crate::cookies::matching;
use crate::cookies::normalize::{
    normalize_in, parse_cookie_header, parse_target_url, to_cookie_line,
};
use crate::store::{CookieStore, HttpCookieStore, WebKitCookieStore};

/// Gateway over a system cookie store and a web-engine-isolated one.
///
/// Use [`CookieManager::new`] for the default wiring, or
/// [`CookieManager::builder`] to swap either store or the HTTP client.
pub struct CookieManager {
    system_store: Arc<dyn CookieStore>,
    webkit_store: Arc<dyn CookieStore>,
    http_client: reqwest::Client,
}

impl Default for CookieManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieManager {
    /// Create a manager with the default stores and HTTP client.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a manager builder.
    pub fn builder() -> CookieManagerBuilder {
        CookieManagerBuilder::default()
    }

    fn store_for(&self, use_web_kit: bool) -> &dyn CookieStore {
        if use_web_kit {
            self.webkit_store.as_ref()
        } else {
            self.system_store.as_ref()
        }
    }

    /// Validate a cookie against the target URL and store it.
    ///
    /// Fails with `InvalidUrl`, `InvalidCookieValues`, or `DomainMismatch`
    /// before the store is touched.
    pub async fn set_cookie(
        &self,
        url: &str,
        cookie: &Cookie,
        use_web_kit: bool,
    ) -> Result<bool, BridgeError> {
        let target = parse_target_url(url)?;
        let canonical = normalize_in(&target, cookie)?;
        let line = to_cookie_line(&canonical);

        tracing::debug!(host = %target.host_str().unwrap_or(""), name = %canonical.name, "storing cookie");
        let store = self.store_for(use_web_kit);
        let stored = store.set_cookie_line(&target, &line).await?;
        store.flush();
        Ok(stored)
    }

    /// Store a raw `Set-Cookie` header against a URL.
    ///
    /// An empty header rejects with `InvalidCookieValues`; segments the
    /// grammar rejects are dropped silently.
    pub async fn set_from_response(&self, url: &str, cookie: &str) -> Result<bool, BridgeError> {
        if cookie.is_empty() {
            return Err(BridgeError::InvalidCookieValues);
        }

        let target = parse_target_url(url)?;
        let stored = self.system_store.set_cookie_line(&target, cookie).await?;
        self.system_store.flush();
        Ok(stored)
    }

    /// Cookies visible to a URL, keyed by name.
    pub async fn get_cookies(
        &self,
        url: &str,
        use_web_kit: bool,
    ) -> Result<CookieCollection, BridgeError> {
        let target = parse_target_url(url)?;

        if use_web_kit {
            // The isolated store enumerates; the gateway filters by origin.
            let origin = target.host_str().unwrap_or("").to_string();
            let all = self.webkit_store.all_cookies().await?;
            Ok(all
                .into_iter()
                .filter(|c| matching::is_matching_domain(&origin, &c.domain))
                .map(|c| (c.name.clone(), c.to_cookie()))
                .collect())
        } else {
            let cookies = self.system_store.cookies_for_url(&target).await?;
            Ok(cookies
                .into_iter()
                .map(|c| (c.name.clone(), c.to_cookie()))
                .collect())
        }
    }

    /// Perform a GET against the URL, store every `Set-Cookie` header the
    /// response carries, and return the received cookies as a name→value map.
    pub async fn get_from_response(
        &self,
        url: &str,
    ) -> Result<HashMap<String, String>, BridgeError> {
        let target = parse_target_url(url)?;

        tracing::debug!(url = %target, "fetching response cookies");
        let response = self
            .http_client
            .get(target)
            .send()
            .await
            .map_err(|e| BridgeError::network(e.to_string()))?;

        let response_url = response.url().clone();
        let mut received = HashMap::new();

        for header in response.headers().get_all(reqwest::header::SET_COOKIE) {
            let Ok(raw) = header.to_str() else { continue };
            self.system_store.set_cookie_line(&response_url, raw).await?;
            for (name, cookie) in parse_cookie_header(raw) {
                received.insert(name, cookie.value);
            }
        }

        self.system_store.flush();
        Ok(received)
    }

    /// Every cookie in the selected store, keyed by name.
    ///
    /// Fails with `NotSupported` when the store has no enumerate-all
    /// primitive.
    pub async fn get_all(&self, use_web_kit: bool) -> Result<CookieCollection, BridgeError> {
        let all = self.store_for(use_web_kit).all_cookies().await?;
        Ok(all
            .into_iter()
            .map(|c| (c.name.clone(), c.to_cookie()))
            .collect())
    }

    /// Drop every cookie in the selected store.
    pub async fn clear_all(&self, use_web_kit: bool) -> Result<bool, BridgeError> {
        let store = self.store_for(use_web_kit);
        store.remove_all().await?;
        store.flush();
        Ok(true)
    }

    /// Remove cookies carrying `name` whose domain covers the URL's host.
    /// Returns whether any cookie was removed.
    ///
    /// Fails with `NotSupported` when the store has no per-cookie removal
    /// primitive.
    pub async fn clear_by_name(
        &self,
        url: &str,
        name: &str,
        use_web_kit: bool,
    ) -> Result<bool, BridgeError> {
        let target = parse_target_url(url)?;
        let origin = target.host_str().unwrap_or("");

        let store = self.store_for(use_web_kit);
        let removed = store.remove_named(origin, name).await?;
        store.flush();
        Ok(removed)
    }

    /// Ask both stores to persist. Failures are logged by the stores and
    /// never surfaced.
    pub async fn flush(&self) {
        self.system_store.flush();
        self.webkit_store.flush();
    }

    /// Remove session-only cookies from both stores. Returns whether any
    /// cookie was removed from either.
    pub async fn remove_session_cookies(&self) -> Result<bool, BridgeError> {
        let from_system = self.system_store.remove_session_cookies().await?;
        let from_webkit = self.webkit_store.remove_session_cookies().await?;
        Ok(from_system || from_webkit)
    }
}

/// Builder for a [`CookieManager`].
#[derive(Default)]
pub struct CookieManagerBuilder {
    system_store: Option<Arc<dyn CookieStore>>,
    webkit_store: Option<Arc<dyn CookieStore>>,
    http_client: Option<reqwest::Client>,
    persist_path: Option<PathBuf>,
}

impl CookieManagerBuilder {
    /// Replace the system store.
    pub fn system_store(mut self, store: Arc<dyn CookieStore>) -> Self {
        self.system_store = Some(store);
        self
    }

    /// Replace the web-engine-isolated store.
    pub fn webkit_store(mut self, store: Arc<dyn CookieStore>) -> Self {
        self.webkit_store = Some(store);
        self
    }

    /// Use a preconfigured HTTP client for `get_from_response`.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Persist the default system store to this path. Ignored when a custom
    /// system store is supplied.
    pub fn persist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.persist_path = Some(path.into());
        self
    }

    /// Build the manager.
    pub fn build(self) -> CookieManager {
        let system_store = self.system_store.unwrap_or_else(|| match self.persist_path {
            Some(path) => Arc::new(HttpCookieStore::with_persistence(path)),
            None => Arc::new(HttpCookieStore::new()),
        });

        let webkit_store = self
            .webkit_store
            .unwrap_or_else(|| Arc::new(WebKitCookieStore::new()));

        CookieManager {
            system_store,
            webkit_store,
            http_client: self.http_client.unwrap_or_default(),
        }
    }
}
