//! Cookie persistence - save and load cookies to/from disk as JSON.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::cookies::cookie::CanonicalCookie;

/// Serializable representation of a cookie for persistence.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct PersistentCookie {
    name: String,
    value: String,
    domain: String,
    path: String,
    secure: bool,
    http_only: bool,
    version: Option<String>,
    expires_unix_secs: Option<i64>,
}

/// Save a cookie list to a file.
pub fn save_cookies(cookies: &[CanonicalCookie], path: &Path) -> io::Result<()> {
    let persistent: Vec<PersistentCookie> = cookies
        .iter()
        .map(|cookie| PersistentCookie {
            name: cookie.name.clone(),
            value: cookie.value.clone(),
            domain: cookie.domain.clone(),
            path: cookie.path.clone(),
            secure: cookie.secure,
            http_only: cookie.http_only,
            version: cookie.version.clone(),
            expires_unix_secs: cookie.expires.map(|t| t.unix_timestamp()),
        })
        .collect();

    let json = serde_json::to_string_pretty(&persistent)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, json)
}

/// Load cookies from a file, skipping entries that have already expired.
pub fn load_cookies(path: &Path) -> io::Result<Vec<CanonicalCookie>> {
    let json = fs::read_to_string(path)?;
    let persistent: Vec<PersistentCookie> =
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let now = OffsetDateTime::now_utc();
    let mut cookies = Vec::new();

    for pc in persistent {
        let expires = pc
            .expires_unix_secs
            .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok());

        if let Some(expiry) = expires {
            if expiry < now {
                continue;
            }
        }

        cookies.push(CanonicalCookie {
            name: pc.name,
            value: pc.value,
            domain: pc.domain,
            path: pc.path,
            expires,
            secure: pc.secure,
            http_only: pc.http_only,
            version: pc.version,
        });
    }

    Ok(cookies)
}
