//! Rendering of backend resources into views.
//!
//! Views are plain data ([`View`], [`Table`]); turning them into markup is the
//! job of [`html`] and [`text`], and putting them on screen is the job of a
//! [`Mount`].

pub mod html;
mod mount;
mod tables;
pub mod text;

pub use mount::*;
pub use tables::*;

use std::sync::OnceLock;

use chrono::Local;
use chrono_tz::Tz;

use crate::models::parse_timestamp;

/// Zone timestamps are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// The host's zone, looked up once per process
    Local,
    Utc,
    Named(Tz),
}

impl DisplayZone {
    /// The IANA zone to convert into, if one is known.
    pub fn tz(&self) -> Option<Tz> {
        match self {
            DisplayZone::Local => local_zone(),
            DisplayZone::Utc => Some(Tz::UTC),
            DisplayZone::Named(tz) => Some(*tz),
        }
    }
}

fn local_zone() -> Option<Tz> {
    static LOCAL: OnceLock<Option<Tz>> = OnceLock::new();
    *LOCAL.get_or_init(|| {
        let zone = resolve_local_zone(std::env::var("TZ").ok());
        if zone.is_none() {
            tracing::debug!("System time zone has no IANA name, showing numeric offsets");
        }
        zone
    })
}

/// `TZ` wins over the system setting, like libc does. POSIX rules such as
/// `CET-1CEST` have no IANA name and fall through to the system zone.
fn resolve_local_zone(tz_var: Option<String>) -> Option<Tz> {
    tz_var
        .as_deref()
        .map(|name| name.trim_start_matches(':'))
        .and_then(|name| name.parse::<Tz>().ok())
        .or_else(|| {
            iana_time_zone::get_timezone()
                .ok()
                .and_then(|name| name.parse::<Tz>().ok())
        })
}

/// Switches for the optional parts of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Sort origins by hostname and leases by expiry
    pub sort: bool,
    /// Render timestamps in long form instead of the raw backend string
    pub format_timestamps: bool,
    /// Attach hover text to reference cells
    pub tooltips: bool,
    pub time_zone: DisplayZone,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sort: true,
            format_timestamps: true,
            tooltips: true,
            time_zone: DisplayZone::Local,
        }
    }
}

/// Something that can be mounted.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Pretty-printed JSON document
    Json(String),
    Table(Table),
}

/// A table with a fixed header and one row per resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// A table cell. Multiple fragments are shown separated by `", "`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub fragments: Vec<Fragment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Text(String),
    /// Monospaced identifier with optional hover text
    Code { text: String, title: Option<String> },
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Text(text) => text,
            Fragment::Code { text, .. } => text,
        }
    }
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::Text(value.into())],
        }
    }

    pub fn code(value: impl Into<String>, title: Option<String>) -> Self {
        Self {
            fragments: vec![Fragment::Code {
                text: value.into(),
                title,
            }],
        }
    }

    /// Cell content without markup.
    pub fn plain_text(&self) -> String {
        self.fragments
            .iter()
            .map(Fragment::text)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
impl Table {
    /// Plain text of one column, top to bottom.
    pub fn column(&self, index: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.cells.get(index).map(Cell::plain_text).unwrap_or_default())
            .collect()
    }
}

/// Format a backend timestamp for display.
///
/// Falls back to the raw string when formatting is off or the value does not parse.
pub fn format_timestamp(raw: &str, options: &RenderOptions) -> String {
    if !options.format_timestamps {
        return raw.to_string();
    }
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    const LONG_FORM: &str = "%Y-%m-%d %H:%M:%S %Z";
    match options.time_zone.tz() {
        Some(tz) => ts.with_timezone(&tz).format(LONG_FORM).to_string(),
        None => ts.with_timezone(&Local).format(LONG_FORM).to_string(),
    }
}
