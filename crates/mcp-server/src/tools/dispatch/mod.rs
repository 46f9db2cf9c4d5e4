//! MCP tool dispatch for the gateway.
//!
//! `tools/list` answers with the discovery tools plus the allowed slice of the upstream catalog.
//! `tools/call` is routed to a local discovery handler, rejected by the access policy, or
//! forwarded to the upstream unchanged.

mod router;
mod service;

#[cfg(test)]
mod tests;

use super::catalog::{meta_tool_descriptors, MetaTool};
use super::catalog_cache::CatalogCache;
use crate::policy::AccessPolicy;
use crate::upstream::{UpstreamError, UpstreamSource};
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use rmcp::ErrorData as McpError;
use std::sync::Arc;
use std::time::Duration;

/// Destination of a `tools/call`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToolRoute {
    /// Answered locally from the catalog snapshot.
    Meta(MetaTool),
    /// Not whitelisted; rejected without contacting the upstream.
    Blocked,
    /// Whitelisted; sent to the upstream as-is.
    Forward,
}

impl ToolRoute {
    pub(crate) fn resolve(name: &str, policy: &AccessPolicy) -> Self {
        if let Some(tool) = MetaTool::from_name(name) {
            ToolRoute::Meta(tool)
        } else if policy.is_allowed(name) {
            ToolRoute::Forward
        } else {
            ToolRoute::Blocked
        }
    }
}

/// Toolgate MCP service.
#[derive(Clone)]
pub struct GatewayService {
    policy: Arc<AccessPolicy>,
    upstream: Arc<dyn UpstreamSource>,
    /// Shared across clones so every connection sees one snapshot.
    catalog: Arc<CatalogCache>,
    call_timeout: Option<Duration>,
}

impl GatewayService {
    pub fn new(policy: AccessPolicy, upstream: Arc<dyn UpstreamSource>) -> Self {
        Self {
            policy: Arc::new(policy),
            upstream,
            catalog: Arc::new(CatalogCache::new()),
            call_timeout: None,
        }
    }

    /// Bound the catalog fetch and every forwarded call.
    pub fn with_call_timeout(mut self, limit: Option<Duration>) -> Self {
        self.call_timeout = limit;
        self
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Discovery tools followed by the whitelisted upstream tools, in upstream order.
    pub async fn list_capabilities(&self) -> Result<Vec<Tool>, McpError> {
        let catalog = self.catalog().await?;
        let mut tools = meta_tool_descriptors();
        tools.extend(
            catalog
                .iter()
                .filter(|tool| self.policy.is_allowed(&tool.name))
                .cloned(),
        );
        Ok(tools)
    }

    pub async fn invoke(&self, request: CallToolRequestParam) -> Result<CallToolResult, McpError> {
        let route = ToolRoute::resolve(&request.name, &self.policy);
        log::debug!("tools/call {} -> {route:?}", request.name);
        match route {
            ToolRoute::Meta(tool) => router::call_meta_tool(self, tool, request.arguments).await,
            ToolRoute::Blocked => {
                log::warn!("Rejected call to blocked tool `{}`", request.name);
                Err(router::error::blocked_tool_error(&request.name))
            }
            ToolRoute::Forward => router::forward::forward(self, request).await,
        }
    }

    pub(crate) async fn catalog(&self) -> Result<Arc<[Tool]>, UpstreamError> {
        let policy = self.policy.as_ref();
        self.catalog
            .get_or_fetch(self.upstream.as_ref(), self.call_timeout, |tools| {
                report_catalog(policy, tools)
            })
            .await
    }
}

fn report_catalog(policy: &AccessPolicy, tools: &[Tool]) {
    let allowed = tools
        .iter()
        .filter(|tool| policy.is_allowed(&tool.name))
        .count();
    log::info!(
        "Upstream catalog: {allowed} allowed, {} blocked",
        tools.len() - allowed
    );
    for name in policy.names() {
        if !tools.iter().any(|tool| tool.name == name) {
            log::warn!("Allowed tool `{name}` is not offered by the upstream");
        }
    }
}
