//! Toolgate MCP gateway
//!
//! Fronts an upstream MCP server (the GitHub MCP server by default) and exposes only the tools
//! named in `config.yaml`. Four discovery tools let callers see what the upstream offers and how to
//! enable a blocked tool.
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "toolgate": {
//!       "command": "toolgate-mcp",
//!       "env": { "GITHUB_PERSONAL_ACCESS_TOKEN": "<token>" }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context as AnyhowContext, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub mod config;
pub mod policy;
mod tools;
pub mod upstream;

#[cfg(test)]
mod test_support;

pub use config::{Config, ConfigError, UpstreamConfig};
pub use policy::AccessPolicy;
pub use tools::GatewayService;
pub use upstream::{UpstreamClient, UpstreamError, UpstreamSource};

/// Credential the upstream needs. It is checked here and inherited by the upstream process.
pub const CREDENTIAL_ENV: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

/// Fatal startup or runtime failure. `Display` is the exact line printed before exiting 1.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Error: GITHUB_PERSONAL_ACCESS_TOKEN environment variable is required")]
    MissingCredential,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {0:#}")]
    Server(anyhow::Error),
}

/// Run the gateway on stdio until the client disconnects or a shutdown signal arrives.
pub async fn main_entry() -> std::result::Result<(), StartupError> {
    // Logs go to stderr only; stdout carries the MCP protocol.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    require_credential(std::env::var(CREDENTIAL_ENV).ok().as_deref())?;

    let (config_path, config) = Config::discover()?;
    let policy = AccessPolicy::from_names(config.allowed_tools.iter().cloned())?;
    log::info!(
        "Loaded {} ({} allowed tools); upstream: {} {}",
        config_path.display(),
        policy.names().len(),
        config.upstream.command,
        config.upstream.args.join(" ")
    );

    let call_timeout = config.upstream.call_timeout;
    let upstream = Arc::new(UpstreamClient::new(config.upstream));
    let outcome = run(upstream.clone(), policy, call_timeout).await;
    upstream.disconnect().await;
    log::info!("Toolgate stopped");
    outcome.map_err(StartupError::Server)
}

/// Presence check only; the value is never inspected or logged.
pub fn require_credential(value: Option<&str>) -> std::result::Result<(), StartupError> {
    match value {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(StartupError::MissingCredential),
    }
}

async fn run(
    upstream: Arc<UpstreamClient>,
    policy: AccessPolicy,
    call_timeout: Option<Duration>,
) -> Result<()> {
    upstream
        .connect()
        .await
        .context("failed to connect to the upstream MCP server")?;

    let gateway = GatewayService::new(policy, upstream).with_call_timeout(call_timeout);
    let server = gateway
        .serve(stdio())
        .await
        .context("failed to start the MCP server on stdio")?;
    log::info!("Toolgate MCP server ready");

    let cancel = server.cancellation_token();
    let waiting = server.waiting();
    tokio::pin!(waiting);

    tokio::select! {
        outcome = &mut waiting => {
            let reason = outcome.context("MCP server task failed")?;
            log::info!("MCP session ended ({reason:?})");
        }
        signal = shutdown_signal() => {
            signal.context("failed to listen for shutdown signals")?;
            log::info!("Shutdown signal received");
            cancel.cancel();
            (&mut waiting).await.context("MCP server task failed")?;
        }
    }
    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
