//! Cookie types, normalization, and wire-format handling.
//!
//! This module holds everything between the host-facing attribute bag and the
//! stores:
//!
//! - **Types**: [`Cookie`](cookie::Cookie) (host-facing, serde),
//!   [`CanonicalCookie`](cookie::CanonicalCookie) (validated internal form),
//!   [`CookieCollection`](cookie::CookieCollection)
//! - **Normalization**: [`normalize`](normalize::normalize) derives a canonical
//!   domain, validates it against the target URL, and fills defaults
//! - **Wire format**: [`to_cookie_line`](normalize::to_cookie_line) RFC 6265
//!   encoding, [`parse_cookie_header`](normalize::parse_cookie_header) decoding
//! - **Dates**: [`date`] handles the ISO-8601-with-offset attribute form on
//!   input and RFC 1123 on the wire
//! - **Matching**: [`matching`] holds the read-side domain and path predicates
//!
//! Note there are deliberately two domain predicates in play: write-path
//! validation ([`normalize`](normalize::normalize)) uses a loose substring
//! containment check, while read-path filtering
//! ([`matching::is_matching_domain`]) requires an exact match or a proper
//! dot-suffix. They are kept separate per call site.

pub mod cookie;
pub mod date;
pub mod matching;
pub mod normalize;
