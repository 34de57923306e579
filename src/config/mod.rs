//! Configuration module for the DLS console.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use chrono_tz::Tz;

use crate::errors::ConsoleError;
use crate::render::{DisplayZone, RenderOptions};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the DLS backend
    pub backend_url: String,
    /// Address the console server binds to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Per-request timeout; `None` waits forever
    pub request_timeout: Option<Duration>,
    /// Accept self-signed backend certificates
    pub accept_invalid_certs: bool,
    /// How views are built
    pub render: RenderOptions,
    /// Re-render the affected table after a delete
    pub refresh_after_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "https://localhost".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8081)),
            log_level: "info".to_string(),
            request_timeout: None,
            accept_invalid_certs: false,
            render: RenderOptions::default(),
            refresh_after_delete: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConsoleError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let backend_url = env::var("DLS_CONSOLE_BACKEND_URL").unwrap_or(defaults.backend_url);

        let bind_addr = match env::var("DLS_CONSOLE_BIND_ADDR") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConsoleError::Config(format!("Invalid DLS_CONSOLE_BIND_ADDR: {}", raw))
            })?,
            Err(_) => defaults.bind_addr,
        };

        let log_level = env::var("DLS_CONSOLE_LOG_LEVEL").unwrap_or(defaults.log_level);

        let request_timeout = match env::var("DLS_CONSOLE_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConsoleError::Config(format!("Invalid DLS_CONSOLE_TIMEOUT_SECS: {}", raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let time_zone = match env::var("DLS_CONSOLE_TIME_ZONE") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.render.time_zone,
        };

        Ok(Self {
            backend_url,
            bind_addr,
            log_level,
            request_timeout,
            accept_invalid_certs: bool_var("DLS_CONSOLE_INSECURE", defaults.accept_invalid_certs)?,
            render: RenderOptions {
                sort: bool_var("DLS_CONSOLE_SORT", defaults.render.sort)?,
                format_timestamps: bool_var(
                    "DLS_CONSOLE_FORMAT_TIMESTAMPS",
                    defaults.render.format_timestamps,
                )?,
                tooltips: bool_var("DLS_CONSOLE_TOOLTIPS", defaults.render.tooltips)?,
                time_zone,
            },
            refresh_after_delete: bool_var(
                "DLS_CONSOLE_REFRESH_AFTER_DELETE",
                defaults.refresh_after_delete,
            )?,
        })
    }
}

/// Read a boolean flag, accepting the usual spellings.
fn bool_var(name: &str, default: bool) -> Result<bool, ConsoleError> {
    match env::var(name) {
        Ok(raw) => parse_bool(&raw)
            .ok_or_else(|| ConsoleError::Config(format!("Invalid {}: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl std::str::FromStr for DisplayZone {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "local" => Ok(DisplayZone::Local),
            "utc" => Ok(DisplayZone::Utc),
            _ => name.parse::<Tz>().map(DisplayZone::Named).map_err(|e| {
                ConsoleError::Config(format!(
                    "Invalid DLS_CONSOLE_TIME_ZONE: {} (expected local, utc or an IANA zone: {})",
                    name, e
                ))
            }),
        }
    }
}
