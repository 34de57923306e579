//! Console form actions. Each one deletes and redirects back to its panel.
//!
//! Panel locks are never held across the delete; the follow-up refresh
//! swaps the new view in on its own.

use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;

use super::{refresh_panel, Panel};
use crate::actions::{self, ActionOptions};
use crate::errors::ConsoleError;
use crate::AppState;

/// Form body naming an origin.
#[derive(Debug, Deserialize)]
pub struct OriginForm {
    #[serde(default)]
    pub origin_ref: String,
}

/// Form body naming a lease.
#[derive(Debug, Deserialize)]
pub struct LeaseForm {
    #[serde(default)]
    pub lease_ref: String,
}

/// POST /-/console/origins/delete-all
pub async fn delete_all_origins(State(state): State<AppState>) -> Result<Redirect, ConsoleError> {
    let options = ActionOptions::from(state.config.as_ref());
    actions::delete_origins(&state.client, &options, None).await?;
    Ok(after_delete(&state, &options, Panel::Origins).await)
}

/// POST /-/console/origins/delete
pub async fn delete_origin(
    State(state): State<AppState>,
    Form(form): Form<OriginForm>,
) -> Result<Redirect, ConsoleError> {
    let options = ActionOptions::from(state.config.as_ref());
    actions::delete_origin(&state.client, &form.origin_ref, &options, None).await?;
    Ok(after_delete(&state, &options, Panel::Origins).await)
}

/// POST /-/console/leases/delete
pub async fn delete_lease(
    State(state): State<AppState>,
    Form(form): Form<LeaseForm>,
) -> Result<Redirect, ConsoleError> {
    let options = ActionOptions::from(state.config.as_ref());
    actions::delete_lease(&state.client, &form.lease_ref, &options, None).await?;
    Ok(after_delete(&state, &options, Panel::Leases).await)
}

/// POST /-/console/leases/delete-expired
pub async fn delete_expired_leases(
    State(state): State<AppState>,
) -> Result<Redirect, ConsoleError> {
    let options = ActionOptions::from(state.config.as_ref());
    actions::delete_expired_leases(&state.client, &options, None).await?;
    Ok(after_delete(&state, &options, Panel::Leases).await)
}

async fn after_delete(state: &AppState, options: &ActionOptions, panel: Panel) -> Redirect {
    if options.refresh_after_delete {
        refresh_panel(state, panel).await;
    }
    match panel {
        Panel::Config => Redirect::to("/-/console/config"),
        Panel::Origins => Redirect::to("/-/console/origins"),
        Panel::Leases => Redirect::to("/-/console/leases"),
    }
}
