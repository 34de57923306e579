//! Console pages.

use axum::{extract::State, response::Html};

use super::{layout, render_panel, Panel};
use crate::AppState;

/// GET /-/console - All panels, loaded concurrently.
pub async fn console_page(State(state): State<AppState>) -> Html<String> {
    let (config, origins, leases) = tokio::join!(
        render_panel(&state, Panel::Config),
        render_panel(&state, Panel::Origins),
        render_panel(&state, Panel::Leases),
    );

    layout(
        "DLS console",
        &[
            (Panel::Config, config),
            (Panel::Origins, origins),
            (Panel::Leases, leases),
        ],
    )
}

/// GET /-/console/config
pub async fn config_page(State(state): State<AppState>) -> Html<String> {
    single(&state, Panel::Config).await
}

/// GET /-/console/origins
pub async fn origins_page(State(state): State<AppState>) -> Html<String> {
    single(&state, Panel::Origins).await
}

/// GET /-/console/leases
pub async fn leases_page(State(state): State<AppState>) -> Html<String> {
    single(&state, Panel::Leases).await
}

async fn single(state: &AppState, panel: Panel) -> Html<String> {
    let content = render_panel(state, panel).await;
    layout(panel.title(), &[(panel, content)])
}
