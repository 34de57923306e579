//! Command line front end.

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};

use crate::actions::{self, ActionOptions};
use crate::client::ResourceClient;
use crate::config::Config;
use crate::errors::ConsoleError;
use crate::prompt::{resolve_reference, LinePrompt, Prompt, LEASE_REF_PROMPT, ORIGIN_REF_PROMPT};
use crate::render::{refresh_config, refresh_leases, refresh_origins, Mount};

/// DLS console: inspect and clean up origins and leases of a license service
#[derive(Parser, Debug)]
#[command(name = "dls-console", version, about)]
pub struct Cli {
    /// DLS backend base URL
    #[arg(long, env = "DLS_CONSOLE_BACKEND_URL")]
    url: Option<String>,

    /// Output format for rendered views
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the backend configuration
    Config,
    /// List origins with their leases
    Origins,
    /// List leases with their origin
    Leases,
    /// Delete every origin
    DeleteOrigins,
    /// Delete one origin; asks for the reference if none is given
    DeleteOrigin { origin_ref: Option<String> },
    /// Delete one lease; asks for the reference if none is given
    DeleteLease { lease_ref: Option<String> },
    /// Delete all expired leases
    DeleteExpiredLeases,
    /// Check that the backend is up
    Health,
    /// Serve the console pages
    Serve,
}

impl Cli {
    pub async fn run(self, mut config: Config) -> Result<(), ConsoleError> {
        if let Some(url) = self.url {
            config.backend_url = url;
        }

        if self.command == Commands::Serve {
            return crate::serve(config).await;
        }

        let client = ResourceClient::new(&config)?;
        let options = ActionOptions::from(&config);
        let mut prompt = LinePrompt::stdio();
        let mut stdout = std::io::stdout().lock();

        run_command(
            self.command,
            &client,
            &options,
            self.format,
            &mut prompt,
            &mut stdout,
        )
        .await
    }
}

/// Execute one non-server command, writing rendered output to `out`.
pub async fn run_command(
    command: Commands,
    client: &ResourceClient,
    options: &ActionOptions,
    format: OutputFormat,
    prompt: &mut impl Prompt,
    out: &mut impl Write,
) -> Result<(), ConsoleError> {
    let mut mount = Mount::new();

    match command {
        Commands::Config => refresh_config(client, &mut mount).await?,
        Commands::Origins => refresh_origins(client, &options.render, &mut mount).await?,
        Commands::Leases => refresh_leases(client, &options.render, &mut mount).await?,
        Commands::DeleteOrigins => {
            actions::delete_origins(client, options, Some(&mut mount)).await?;
            writeln!(out, "All origins deleted.")?;
        }
        Commands::DeleteOrigin { origin_ref } => {
            let Some(origin_ref) = resolve_reference(origin_ref, prompt, ORIGIN_REF_PROMPT) else {
                writeln!(out, "No origin_ref given, nothing deleted.")?;
                return Ok(());
            };
            actions::delete_origin(client, &origin_ref, options, Some(&mut mount)).await?;
            writeln!(out, "Origin '{}' deleted.", origin_ref)?;
        }
        Commands::DeleteLease { lease_ref } => {
            let Some(lease_ref) = resolve_reference(lease_ref, prompt, LEASE_REF_PROMPT) else {
                writeln!(out, "No lease_ref given, nothing deleted.")?;
                return Ok(());
            };
            actions::delete_lease(client, &lease_ref, options, Some(&mut mount)).await?;
            writeln!(out, "Lease '{}' deleted.", lease_ref)?;
        }
        Commands::DeleteExpiredLeases => {
            actions::delete_expired_leases(client, options, Some(&mut mount)).await?;
            writeln!(out, "Expired leases deleted.")?;
        }
        Commands::Health => {
            client.health().await?;
            writeln!(out, "Backend at {} is up.", client.base_url())?;
        }
        Commands::Serve => {
            return Err(ConsoleError::Config(
                "serve is not a one-shot command".to_string(),
            ))
        }
    }

    if !mount.is_empty() {
        let rendered = match format {
            OutputFormat::Html => mount.to_html(),
            OutputFormat::Text => mount.to_text(),
        };
        writeln!(out, "{}", rendered)?;
    }

    Ok(())
}
