//! DLS Console
//!
//! Admin console for a delegated license service: lists the backend's
//! configuration, origins and leases, and deletes origins and leases.

mod actions;
mod api;
mod cli;
mod client;
mod config;
mod errors;
mod models;
mod prompt;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::Panels;
use client::ResourceClient;
use config::Config;
use errors::ConsoleError;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ResourceClient>,
    pub config: Arc<Config>,
    pub panels: Arc<Panels>,
}

impl AppState {
    pub fn new(client: ResourceClient, config: Config) -> Self {
        Self {
            client: Arc::new(client),
            config: Arc::new(config),
            panels: Arc::new(Panels::default()),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Arguments first, so --help and --version never depend on the environment
    let cli = cli::Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: cli::Cli) -> Result<(), ConsoleError> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging; stdout is reserved for rendered output
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli.run(config).await
}

/// Run the console server until it is stopped.
pub async fn serve(config: Config) -> Result<(), ConsoleError> {
    tracing::info!("Starting DLS console");
    tracing::info!("Backend URL: {}", config.backend_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.accept_invalid_certs {
        tracing::warn!("Backend certificate verification is disabled (DLS_CONSOLE_INSECURE)");
    }

    let client = ResourceClient::new(&config)?;
    let bind_addr = config.bind_addr;
    let app = create_router(AppState::new(client, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Console listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the console router with all routes.
pub fn create_router(state: AppState) -> Router {
    let console_routes = Router::new()
        // Pages
        .route("/-/console", get(api::console_page))
        .route("/-/console/config", get(api::config_page))
        .route("/-/console/origins", get(api::origins_page))
        .route("/-/console/leases", get(api::leases_page))
        // Actions
        .route("/-/console/origins/delete", post(api::delete_origin))
        .route("/-/console/origins/delete-all", post(api::delete_all_origins))
        .route("/-/console/leases/delete", post(api::delete_lease))
        .route("/-/console/leases/delete-expired", post(api::delete_expired_leases));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(console_routes)
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
