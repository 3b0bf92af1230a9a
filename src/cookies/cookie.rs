use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::cookies::date;

/// Host-facing cookie attribute bag.
///
/// `name` and `value` are required for a write; everything else is optional
/// with defaults applied during normalization. `expires` carries an
/// ISO-8601-with-offset timestamp string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Cookie {
    /// Shorthand for the required fields; attributes default to absent.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Cookie {
            name: name.into(),
            value: value.into(),
            ..Cookie::default()
        }
    }
}

/// Cookies keyed by name. Collisions across scopes collapse: last write wins.
pub type CookieCollection = HashMap<String, Cookie>;

/// A validated cookie with typed fields, ready for a store.
///
/// Produced by [`normalize`](crate::cookies::normalize::normalize): the domain
/// has been checked against the target URL, defaults are filled, and the
/// expiry is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub expires: Option<OffsetDateTime>,
    pub secure: bool,
    pub http_only: bool,
    pub version: Option<String>,
}

impl CanonicalCookie {
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        match self.expires {
            Some(expiry) => expiry < current_time,
            None => false,
        }
    }

    /// A session cookie carries no explicit expiry and lives until the jar
    /// drops session state.
    pub fn is_session(&self) -> bool {
        self.expires.is_none()
    }

    /// Report form: attribute bag with the expiry formatted back to the
    /// ISO-8601-with-offset string shape.
    pub fn to_cookie(&self) -> Cookie {
        Cookie {
            name: self.name.clone(),
            value: self.value.clone(),
            domain: Some(self.domain.clone()),
            path: Some(self.path.clone()),
            expires: self.expires.and_then(date::format_expiry),
            secure: Some(self.secure),
            http_only: Some(self.http_only),
            version: self.version.clone(),
        }
    }
}
