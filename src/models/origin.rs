//! Origin model: a registered host that holds leases.

use serde::{Deserialize, Serialize};

use super::Lease;

/// A host registered with the license service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Origin {
    pub origin_ref: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub guest_driver_version: Option<String>,
    #[serde(default)]
    pub os_platform: Option<String>,
    #[serde(default)]
    pub os_version: Option<String>,
    /// Only populated when listed with `leases=true`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leases: Vec<Lease>,
}

impl Origin {
    /// Hostname or the empty string.
    pub fn hostname_or_empty(&self) -> &str {
        self.hostname.as_deref().unwrap_or("")
    }

    /// Platform and version, e.g. `Ubuntu 22.04 (5.15.0)`.
    pub fn os_label(&self) -> String {
        format!(
            "{} ({})",
            self.os_platform.as_deref().unwrap_or(""),
            self.os_version.as_deref().unwrap_or("")
        )
    }
}
