//! Lease model: a time-bounded grant held by an origin.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Origin;

/// A license lease as listed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lease {
    pub lease_ref: String,
    pub origin_ref: String,
    pub lease_created: String,
    pub lease_updated: String,
    pub lease_expires: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_renewal: Option<String>,
    /// Only populated when listed with `origin=true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
}

impl Lease {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.lease_expires)
    }

    /// Hostname of the embedded origin, if the lease was listed with it.
    pub fn origin_hostname(&self) -> Option<&str> {
        self.origin.as_ref().and_then(|o| o.hostname.as_deref())
    }
}

/// Parse a backend timestamp.
///
/// The backend emits ISO-8601 via `isoformat()`, with or without an offset.
/// Offset-less values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}
