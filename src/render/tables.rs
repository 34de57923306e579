//! One view builder per resource kind.

use super::{format_timestamp, Cell, Fragment, RenderOptions, Row, Table, View};
use crate::errors::ConsoleError;
use crate::models::{Lease, Origin};

pub const ORIGIN_COLUMNS: [&str; 5] = ["origin", "hostname", "OS", "driver version", "leases"];
pub const LEASE_COLUMNS: [&str; 5] = ["lease", "created", "updated", "expires", "origin"];

/// The config dump, pretty-printed with two-space indentation.
pub fn config_view(config: &serde_json::Value) -> Result<View, ConsoleError> {
    Ok(View::Json(serde_json::to_string_pretty(config)?))
}

/// Origins table, ordered by hostname (case-insensitive) when sorting is on.
pub fn origins_table(mut origins: Vec<Origin>, options: &RenderOptions) -> Table {
    if options.sort {
        origins.sort_by_cached_key(|o| o.hostname_or_empty().to_lowercase());
    }

    let rows = origins
        .iter()
        .map(|origin| Row {
            cells: vec![
                Cell::code(&origin.origin_ref, None),
                Cell::text(origin.hostname_or_empty()),
                Cell::text(origin.os_label()),
                Cell::text(origin.guest_driver_version.as_deref().unwrap_or("")),
                lease_refs(&origin.leases, options),
            ],
        })
        .collect();

    Table {
        columns: ORIGIN_COLUMNS.to_vec(),
        rows,
    }
}

/// Leases table, ordered by expiry when sorting is on.
///
/// Leases whose expiry does not parse go last.
pub fn leases_table(mut leases: Vec<Lease>, options: &RenderOptions) -> Table {
    if options.sort {
        leases.sort_by_cached_key(|l| {
            let expires = l.expires_at();
            (expires.is_none(), expires)
        });
    }

    let rows = leases
        .iter()
        .map(|lease| {
            let hostname = lease
                .origin_hostname()
                .filter(|_| options.tooltips)
                .map(|h| format!("hostname: {}", h));

            Row {
                cells: vec![
                    Cell::code(&lease.lease_ref, None),
                    Cell::text(format_timestamp(&lease.lease_created, options)),
                    Cell::text(format_timestamp(&lease.lease_updated, options)),
                    Cell::text(format_timestamp(&lease.lease_expires, options)),
                    Cell::code(&lease.origin_ref, hostname),
                ],
            }
        })
        .collect();

    Table {
        columns: LEASE_COLUMNS.to_vec(),
        rows,
    }
}

fn lease_refs(leases: &[Lease], options: &RenderOptions) -> Cell {
    let fragments = leases
        .iter()
        .map(|lease| Fragment::Code {
            text: lease.lease_ref.clone(),
            title: options
                .tooltips
                .then(|| format!("expires: {}", format_timestamp(&lease.lease_expires, options))),
        })
        .collect();

    Cell { fragments }
}
