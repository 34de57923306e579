//! Delete actions.
//!
//! Every action takes its target explicitly; asking the operator for a
//! missing reference belongs to the caller (see `crate::prompt`). After a
//! successful delete the affected table is re-rendered into the supplied
//! mount when `refresh_after_delete` is on.

use crate::client::ResourceClient;
use crate::config::Config;
use crate::errors::ConsoleError;
use crate::render::{refresh_leases, refresh_origins, Mount, RenderOptions};

/// Behaviour shared by all delete actions.
#[derive(Debug, Clone)]
pub struct ActionOptions {
    pub refresh_after_delete: bool,
    pub render: RenderOptions,
}

impl Default for ActionOptions {
    fn default() -> Self {
        Self {
            refresh_after_delete: true,
            render: RenderOptions::default(),
        }
    }
}

impl From<&Config> for ActionOptions {
    fn from(config: &Config) -> Self {
        Self {
            refresh_after_delete: config.refresh_after_delete,
            render: config.render.clone(),
        }
    }
}

/// Which table a delete affects.
#[derive(Debug, Clone, Copy)]
enum Affected {
    Origins,
    Leases,
}

/// Delete every origin. No confirmation is asked.
pub async fn delete_origins(
    client: &ResourceClient,
    options: &ActionOptions,
    mount: Option<&mut Mount>,
) -> Result<(), ConsoleError> {
    client.delete_origins().await?;
    tracing::info!("Deleted all origins");
    refresh(client, options, mount, Affected::Origins).await;
    Ok(())
}

/// Delete a single origin. An empty reference is rejected without a request.
pub async fn delete_origin(
    client: &ResourceClient,
    origin_ref: &str,
    options: &ActionOptions,
    mount: Option<&mut Mount>,
) -> Result<(), ConsoleError> {
    client.delete_origin(origin_ref).await?;
    tracing::info!(origin_ref, "Deleted origin");
    refresh(client, options, mount, Affected::Origins).await;
    Ok(())
}

/// Delete a single lease. An empty reference is rejected without a request.
pub async fn delete_lease(
    client: &ResourceClient,
    lease_ref: &str,
    options: &ActionOptions,
    mount: Option<&mut Mount>,
) -> Result<(), ConsoleError> {
    client.delete_lease(lease_ref).await?;
    tracing::info!(lease_ref, "Deleted lease");
    refresh(client, options, mount, Affected::Leases).await;
    Ok(())
}

/// Delete all leases past their expiry.
pub async fn delete_expired_leases(
    client: &ResourceClient,
    options: &ActionOptions,
    mount: Option<&mut Mount>,
) -> Result<(), ConsoleError> {
    client.delete_expired_leases().await?;
    tracing::info!("Deleted expired leases");
    refresh(client, options, mount, Affected::Leases).await;
    Ok(())
}

/// Re-render after a delete. The delete already happened, so a failed
/// refresh only leaves the mount as it was.
async fn refresh(
    client: &ResourceClient,
    options: &ActionOptions,
    mount: Option<&mut Mount>,
    affected: Affected,
) {
    let Some(mount) = mount.filter(|_| options.refresh_after_delete) else {
        return;
    };

    let result = match affected {
        Affected::Origins => refresh_origins(client, &options.render, mount).await,
        Affected::Leases => refresh_leases(client, &options.render, mount).await,
    };
    if let Err(e) = result {
        tracing::warn!("Failed to refresh {:?} after delete: {}", affected, e);
    }
}
