use thiserror::Error;

/// Bridge-level failure taxonomy.
///
/// Every operation surfaces failures as one of these variants. Hosts receive a
/// `(code, message)` pair: [`BridgeError::code`] yields the stable machine code,
/// the `Display` impl the human-readable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Invalid URL: It may be missing a protocol (ex. http:// or https://).")]
    InvalidUrl,
    #[error("Unable to add cookie - invalid values")]
    InvalidCookieValues,
    #[error("Cookie URL host {host} and domain {domain} mismatched. The cookie won't set correctly.")]
    DomainMismatch { host: String, domain: String },
    #[error("{0}")]
    NotSupported(&'static str),
    #[error("Network request failed: {message}")]
    NetworkError { message: String },
    #[error("Cookie store failure: {message}")]
    PlatformError { message: String },
}

impl BridgeError {
    /// Stable string code delivered to hosts alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::InvalidUrl => "invalid_url",
            BridgeError::InvalidCookieValues => "invalid_cookie_values",
            BridgeError::DomainMismatch { .. } => "domain_mismatch",
            BridgeError::NotSupported(_) => "not_supported",
            BridgeError::NetworkError { .. } => "network_error",
            BridgeError::PlatformError { .. } => "platform_error",
        }
    }

    /// Create a domain mismatch error carrying both sides of the comparison.
    pub fn domain_mismatch(host: impl Into<String>, domain: impl Into<String>) -> Self {
        BridgeError::DomainMismatch {
            host: host.into(),
            domain: domain.into(),
        }
    }

    /// Create a network error from an underlying transport failure.
    pub fn network(message: impl Into<String>) -> Self {
        BridgeError::NetworkError {
            message: message.into(),
        }
    }

    /// Create an opaque store failure.
    pub fn platform(message: impl Into<String>) -> Self {
        BridgeError::PlatformError {
            message: message.into(),
        }
    }
}
