//! LINE Notify command-line client
//!
//! Thin front end over the `line-notify` library:
//! 1. Loads credentials from the config file and `LINE_NOTIFY_*` env vars
//! 2. Runs one OAuth or messaging operation
//! 3. Prints the result to stdout (logs go to stderr as JSON)

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use line_notify::{NotifyClient, generate_state};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // JSON logs on stderr with LOG_LEVEL / RUST_LOG support; stdout carries results
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let (config_path, explicit) = Config::resolve_path(cli.config.as_deref());
    debug!(path = %config_path.display(), explicit, "loading configuration");
    let config = Config::load_or_default(&config_path, explicit)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    let client = build_client(&config)?;
    info!(client_id = client.client_id(), "LINE Notify client ready");

    let output = run(&client, cli.command).await?;
    println!("{output}");
    Ok(())
}

/// Build the SDK client from config, falling back to the environment.
fn build_client(config: &Config) -> Result<NotifyClient> {
    let mut builder = NotifyClient::builder(config.client_options());
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .context("set client_id, client_secret and redirect_uri in the config file or LINE_NOTIFY_* env vars")
}

/// Execute one command and render its result for stdout.
async fn run(client: &NotifyClient, command: Commands) -> Result<String> {
    match command {
        Commands::AuthorizeUrl { state, form_post } => {
            let state = state.unwrap_or_else(generate_state);
            Ok(client.authorize_url(&state, form_post))
        }
        Commands::Exchange { code } => client
            .exchange_code(&code)
            .await
            .context("token exchange failed"),
        Commands::Status { token } => {
            let status = client.status(&token).await.context("status query failed")?;
            Ok(serde_json::to_string_pretty(&status)?)
        }
        Commands::Revoke { token } => {
            let body = client.revoke(&token).await.context("revoke failed")?;
            Ok(serde_json::to_string_pretty(&body)?)
        }
        Commands::Send(args) => {
            let response = client
                .notify(&args.token, &args.notification())
                .await
                .context("sending notification failed")?;
            info!(status = response.status, "notification sent");
            Ok(serde_json::to_string_pretty(&response)?)
        }
    }
}
