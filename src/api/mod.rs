//! Console server.
//!
//! Server-rendered pages whose panels are [`Mount`]s: every page load
//! refreshes the panels it shows and renders whatever they hold afterwards.

mod actions;
mod pages;

pub use actions::*;
pub use pages::*;

use axum::response::Html;
use tokio::sync::RwLock;

use crate::errors::ConsoleError;
use crate::render::html::escape;
use crate::render::{load_config, load_leases, load_origins, Mount, View};
use crate::AppState;

/// One mount per panel, each behind its own lock.
#[derive(Debug, Default)]
pub struct Panels {
    pub config: RwLock<Mount>,
    pub origins: RwLock<Mount>,
    pub leases: RwLock<Mount>,
}

/// Which panel to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Config,
    Origins,
    Leases,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Config => "Config",
            Panel::Origins => "Origins",
            Panel::Leases => "Leases",
        }
    }

    fn mount<'a>(&self, panels: &'a Panels) -> &'a RwLock<Mount> {
        match self {
            Panel::Config => &panels.config,
            Panel::Origins => &panels.origins,
            Panel::Leases => &panels.leases,
        }
    }
}

/// Refresh a panel and return its content as HTML.
///
/// A failed fetch keeps what the panel showed before.
pub async fn render_panel(state: &AppState, panel: Panel) -> String {
    refresh_panel(state, panel).await;
    panel.mount(&state.panels).read().await.to_html()
}

/// Fetch and build a panel's view, then swap it into the mount.
///
/// The lock is only held for the swap, so a hung fetch never blocks other
/// loads of the same panel.
pub async fn refresh_panel(state: &AppState, panel: Panel) {
    match load(state, panel).await {
        Ok(view) => panel.mount(&state.panels).write().await.replace(view),
        Err(e) => tracing::warn!(
            "Failed to refresh {} panel, keeping previous content: {}",
            panel.title(),
            e
        ),
    }
}

async fn load(state: &AppState, panel: Panel) -> Result<View, ConsoleError> {
    let client = state.client.as_ref();
    match panel {
        Panel::Config => load_config(client).await,
        Panel::Origins => load_origins(client, &state.config.render).await,
        Panel::Leases => load_leases(client, &state.config.render).await,
    }
}

/// Wrap panel sections into a complete page.
pub fn layout(title: &str, sections: &[(Panel, String)]) -> Html<String> {
    let mut body = String::new();
    for (panel, content) in sections {
        body.push_str(&format!(
            "<section id=\"{id}\">\n<h2>{title}</h2>\n{forms}<div class=\"mount\">{content}</div>\n</section>\n",
            id = panel.title().to_lowercase(),
            title = panel.title(),
            forms = panel_forms(*panel),
            content = content,
        ));
    }

    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<nav><a href=\"/-/console\">console</a> | <a href=\"/-/console/config\">config</a> | <a href=\"/-/console/origins\">origins</a> | <a href=\"/-/console/leases\">leases</a></nav>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape(title),
        body = body,
    ))
}

fn panel_forms(panel: Panel) -> &'static str {
    match panel {
        Panel::Config => "",
        Panel::Origins => concat!(
            "<form method=\"post\" action=\"/-/console/origins/delete\">",
            "<input name=\"origin_ref\" placeholder=\"origin_ref\"><button>delete origin</button></form>\n",
            "<form method=\"post\" action=\"/-/console/origins/delete-all\">",
            "<button>delete all origins</button></form>\n",
        ),
        Panel::Leases => concat!(
            "<form method=\"post\" action=\"/-/console/leases/delete\">",
            "<input name=\"lease_ref\" placeholder=\"lease_ref\"><button>delete lease</button></form>\n",
            "<form method=\"post\" action=\"/-/console/leases/delete-expired\">",
            "<button>delete expired leases</button></form>\n",
        ),
    }
}
