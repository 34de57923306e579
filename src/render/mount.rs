//! Mount points: where rendered views end up.
//!
//! The refresh functions are the fetch-and-render operations of the console.
//! They only touch their own mount, and only after the fetch succeeded; on
//! any error the previous content stays as it was. The `load_*` functions do
//! the fetch-and-build half without a mount, for callers that guard their
//! mount with a lock.

use super::{config_view, html, leases_table, origins_table, text, RenderOptions, View};
use crate::client::ResourceClient;
use crate::errors::ConsoleError;

/// A slot whose whole content is replaced on every successful render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mount {
    content: Option<View>,
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&View> {
        self.content.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Replace the entire content of the mount.
    pub fn replace(&mut self, view: View) {
        self.content = Some(view);
    }

    /// Current content as HTML; empty when nothing was rendered yet.
    pub fn to_html(&self) -> String {
        self.view().map(html::to_html).unwrap_or_default()
    }

    /// Current content as plain text; empty when nothing was rendered yet.
    pub fn to_text(&self) -> String {
        self.view().map(text::to_text).unwrap_or_default()
    }
}

/// Fetch `/-/config` and build its pretty-printed JSON view.
pub async fn load_config(client: &ResourceClient) -> Result<View, ConsoleError> {
    let config = client.fetch_config().await?;
    config_view(&config)
}

/// Fetch origins with their leases and build the origins table.
pub async fn load_origins(
    client: &ResourceClient,
    options: &RenderOptions,
) -> Result<View, ConsoleError> {
    let origins = client.fetch_origins(true).await?;
    tracing::debug!(count = origins.len(), "rendering origins");
    Ok(View::Table(origins_table(origins, options)))
}

/// Fetch leases with their origin and build the leases table.
pub async fn load_leases(
    client: &ResourceClient,
    options: &RenderOptions,
) -> Result<View, ConsoleError> {
    let leases = client.fetch_leases(true).await?;
    tracing::debug!(count = leases.len(), "rendering leases");
    Ok(View::Table(leases_table(leases, options)))
}

/// Fetch `/-/config` and mount it as pretty-printed JSON.
pub async fn refresh_config(client: &ResourceClient, mount: &mut Mount) -> Result<(), ConsoleError> {
    mount.replace(load_config(client).await?);
    Ok(())
}

/// Fetch origins with their leases and mount the origins table.
pub async fn refresh_origins(
    client: &ResourceClient,
    options: &RenderOptions,
    mount: &mut Mount,
) -> Result<(), ConsoleError> {
    mount.replace(load_origins(client, options).await?);
    Ok(())
}

/// Fetch leases with their origin and mount the leases table.
pub async fn refresh_leases(
    client: &ResourceClient,
    options: &RenderOptions,
    mount: &mut Mount,
) -> Result<(), ConsoleError> {
    mount.replace(load_leases(client, options).await?);
    Ok(())
}
