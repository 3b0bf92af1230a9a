//! Expiry timestamp handling.
//!
//! Two formats cross the boundary: ISO-8601 with milliseconds and a
//! numeric-colon offset (`2027-08-10T10:00:00.000+00:00`) on the host side,
//! and RFC 1123 (`Tue, 10 Aug 2027 10:00:00 GMT`) inside the wire line.

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const ISO_EXPIRES: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory]:[offset_minute]"
);

const RFC1123: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Parse an ISO-8601-with-offset expiry string.
///
/// Unparsable input yields `None`; the caller treats the cookie as having no
/// expiry rather than failing the write. A `Z` suffix or non-millisecond
/// subseconds are accepted via the RFC 3339 fallback.
pub fn parse_expiry(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &ISO_EXPIRES)
        .or_else(|_| OffsetDateTime::parse(raw, &Rfc3339))
        .map_err(|e| {
            tracing::debug!(value = raw, error = %e, "dropping unparsable expiry");
            e
        })
        .ok()
}

/// Format an expiry back to the ISO-8601-with-offset string shape.
pub fn format_expiry(datetime: OffsetDateTime) -> Option<String> {
    datetime
        .format(&ISO_EXPIRES)
        .map_err(|e| {
            tracing::warn!(error = %e, "failed to format expiry");
            e
        })
        .ok()
}

/// Format an expiry for the `expires=` attribute of a wire line.
pub fn format_rfc1123(datetime: OffsetDateTime) -> Option<String> {
    datetime
        .to_offset(UtcOffset::UTC)
        .format(&RFC1123)
        .map_err(|e| {
            tracing::warn!(error = %e, "failed to format expiry");
            e
        })
        .ok()
}
