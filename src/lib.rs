//! # cookiebridge
//!
//! A typed asynchronous bridge over pluggable HTTP cookie stores.
//!
//! `cookiebridge` fronts cookie jars the way a host application expects to
//! talk to them: set, query, enumerate, and clear cookies through an async
//! API, with RFC 6265 normalization and validation applied before anything
//! reaches a store.
//!
//! ## Features
//!
//! - **Normalization**: domain validation against the target URL, defaults
//!   for `path` and `domain`, ISO-8601 expiry parsing
//! - **Wire format**: RFC 6265 cookie-line encoding with RFC 1123 dates,
//!   forgiving decoding of `Set-Cookie`-style strings
//! - **Store strategies**: a process-wide store, a web-engine-isolated store,
//!   and a reduced-surface webview store, selectable per call
//! - **Persistence**: JSON-backed jars flushed on demand
//! - **Response capture**: fetch a URL and absorb its `Set-Cookie` headers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cookiebridge::{Cookie, CookieManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cookiebridge::BridgeError> {
//!     let manager = CookieManager::new();
//!
//!     let mut cookie = Cookie::new("demo", "42");
//!     cookie.domain = Some("example.com".to_string());
//!     cookie.secure = Some(true);
//!
//!     manager.set_cookie("https://example.com", &cookie, false).await?;
//!     let cookies = manager.get_cookies("https://example.com", false).await?;
//!     assert!(cookies.contains_key("demo"));
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error taxonomy
//! - [`cookies`] - Cookie types, normalization, wire format, date handling
//! - [`store`] - The `CookieStore` trait and the bundled stores
//! - [`manager`] - The gateway exposing the operation surface

pub mod base;
pub mod cookies;
pub mod manager;
pub mod store;

pub use base::error::BridgeError;
pub use cookies::cookie::{CanonicalCookie, Cookie, CookieCollection};
pub use manager::{CookieManager, CookieManagerBuilder};
pub use store::{CookieStore, HttpCookieStore, WebKitCookieStore, WebViewCookieStore};
