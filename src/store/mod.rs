//! Cookie store strategies.
//!
//! A [`CookieStore`] is the capability seam between the gateway and a cookie
//! jar. Three implementations ship with the crate:
//!
//! | Store | Enumerate all | Remove by name | `flush` |
//! |-------|---------------|----------------|---------|
//! | [`HttpCookieStore`] | yes | yes | persists (when configured) |
//! | [`WebKitCookieStore`] | yes | yes | no-op (auto-persisting) |
//! | [`WebViewCookieStore`] | no | no | persists (when configured) |
//!
//! The trait provides `NotSupported` defaults for the optional primitives, so
//! a store models a reduced OS surface simply by not overriding them.

use async_trait::async_trait;
use url::Url;

use crate::base::error::BridgeError;
use crate::cookies::cookie::CanonicalCookie;

pub mod http;
pub mod jar;
pub mod persistence;
pub mod webkit;
pub mod webview;

pub use http::HttpCookieStore;
pub use jar::Jar;
pub use webkit::WebKitCookieStore;
pub use webview::WebViewCookieStore;

pub(crate) const ENUMERATION_UNSUPPORTED: &str =
    "Enumerating all cookies is not supported by this cookie store";
pub(crate) const REMOVE_BY_NAME_UNSUPPORTED: &str =
    "Removing a single cookie by name is not supported by this cookie store";

/// A cookie jar behind an async capability interface.
///
/// Methods may complete synchronously; the async contract exists so a store
/// backed by a callback queue slots in without changing callers. The two
/// optional primitives default to [`BridgeError::NotSupported`].
#[async_trait]
pub trait CookieStore: Send + Sync {
    /// Consume a wire-form cookie line (single cookie or semicolon-joined
    /// batch) against a URL. Returns whether anything was stored.
    async fn set_cookie_line(&self, url: &Url, line: &str) -> Result<bool, BridgeError>;

    /// Cookies matching a URL under full RFC 6265 matching: domain suffix,
    /// path prefix, secure-over-https, unexpired.
    async fn cookies_for_url(&self, url: &Url) -> Result<Vec<CanonicalCookie>, BridgeError>;

    /// Every cookie in the jar, across all domains.
    async fn all_cookies(&self) -> Result<Vec<CanonicalCookie>, BridgeError> {
        Err(BridgeError::NotSupported(ENUMERATION_UNSUPPORTED))
    }

    /// Remove cookies carrying `name` whose domain covers `origin`. Returns
    /// whether any cookie was removed.
    async fn remove_named(&self, _origin: &str, _name: &str) -> Result<bool, BridgeError> {
        Err(BridgeError::NotSupported(REMOVE_BY_NAME_UNSUPPORTED))
    }

    /// Drop every cookie. Returns whether the jar held anything.
    async fn remove_all(&self) -> Result<bool, BridgeError>;

    /// Drop cookies without an explicit expiry. Returns whether any were
    /// removed.
    async fn remove_session_cookies(&self) -> Result<bool, BridgeError>;

    /// Persist-to-disk hint. Fire-and-forget: failures are logged by the
    /// store, never surfaced to the caller.
    fn flush(&self);
}
