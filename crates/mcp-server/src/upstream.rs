//! Upstream MCP server connection.
//!
//! The upstream is launched as a child process speaking MCP over stdio. It inherits this
//! process's environment unchanged, which is how the GitHub credential reaches it.

use crate::config::UpstreamConfig;
use async_trait::async_trait;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use rmcp::service::{Peer, RunningService, ServiceError};
use rmcp::transport::TokioChildProcess;
use rmcp::{ErrorData as McpError, RoleClient, ServiceExt};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("upstream client is not connected")]
    NotConnected,

    #[error("failed to spawn upstream MCP server `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("upstream MCP handshake failed: {0}")]
    Handshake(String),

    /// An error response produced by the upstream server itself.
    #[error("upstream error {}: {}", .0.code.0, .0.message)]
    Remote(McpError),

    #[error("upstream transport error: {0}")]
    Transport(String),

    #[error("upstream did not respond within {} ms", .0.as_millis())]
    Timeout(Duration),
}

impl From<ServiceError> for UpstreamError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::McpError(data) => Self::Remote(data),
            other => Self::Transport(other.to_string()),
        }
    }
}

impl From<UpstreamError> for McpError {
    fn from(err: UpstreamError) -> Self {
        match err {
            // Upstream semantics are passed through untouched.
            UpstreamError::Remote(data) => data,
            other => McpError::internal_error(other.to_string(), None),
        }
    }
}

/// Await `fut`, giving up after `limit` when one is configured.
pub(crate) async fn with_deadline<T, F>(limit: Option<Duration>, fut: F) -> Result<T, UpstreamError>
where
    F: Future<Output = Result<T, UpstreamError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| UpstreamError::Timeout(limit))?,
        None => fut.await,
    }
}

/// The capability provider behind the gateway.
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    /// Full, ordered tool catalog of the upstream.
    async fn list_operations(&self) -> Result<Vec<Tool>, UpstreamError>;

    /// Invoke one upstream tool and return its result unmodified.
    async fn invoke_operation(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, UpstreamError>;
}

/// MCP client over a spawned upstream process.
pub struct UpstreamClient {
    config: UpstreamConfig,
    connection: Mutex<Option<RunningService<RoleClient, ()>>>,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            config,
            connection: Mutex::new(None),
        }
    }

    /// Spawn the upstream and complete the MCP handshake. No-op when already connected.
    pub async fn connect(&self) -> Result<(), UpstreamError> {
        let mut connection = self.connection.lock().await;
        if connection.is_some() {
            return Ok(());
        }

        let mut cmd = Command::new(&self.config.command);
        cmd.args(&self.config.args);

        let transport = TokioChildProcess::new(cmd).map_err(|source| UpstreamError::Spawn {
            command: self.config.command.clone(),
            source,
        })?;
        let service = ()
            .serve(transport)
            .await
            .map_err(|err| UpstreamError::Handshake(err.to_string()))?;

        match service.peer_info() {
            Some(info) => log::info!(
                "Connected to upstream {} {}",
                info.server_info.name,
                info.server_info.version
            ),
            None => log::info!("Connected to upstream `{}`", self.config.command),
        }

        *connection = Some(service);
        Ok(())
    }

    /// Stop the upstream session. Failures are logged and swallowed.
    pub async fn disconnect(&self) {
        let Some(service) = self.connection.lock().await.take() else {
            return;
        };
        match service.cancel().await {
            Ok(reason) => log::info!("Upstream disconnected ({reason:?})"),
            Err(err) => log::warn!("Ignoring upstream disconnect failure: {err}"),
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.connection.lock().await.is_some()
    }

    async fn peer(&self) -> Result<Peer<RoleClient>, UpstreamError> {
        self.connection
            .lock()
            .await
            .as_ref()
            .map(|service| service.peer().clone())
            .ok_or(UpstreamError::NotConnected)
    }
}

#[async_trait]
impl UpstreamSource for UpstreamClient {
    async fn list_operations(&self) -> Result<Vec<Tool>, UpstreamError> {
        let peer = self.peer().await?;
        Ok(peer.list_all_tools().await?)
    }

    async fn invoke_operation(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, UpstreamError> {
        let peer = self.peer().await?;
        Ok(peer.call_tool(request).await?)
    }
}
