//! In-memory upstream for unit tests.

use crate::upstream::{UpstreamError, UpstreamSource};
use async_trait::async_trait;
use rmcp::model::{CallToolRequestParam, CallToolResult, Content, JsonObject, Tool};
use rmcp::ErrorData as McpError;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub(crate) fn tool(name: &str, description: &str) -> Tool {
    let schema = json!({
        "type": "object",
        "properties": {"owner": {"type": "string"}},
        "required": ["owner"],
    });
    let schema: JsonObject = match schema {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    };
    Tool::new(name.to_string(), description.to_string(), schema)
}

/// Scripted upstream. Records every fetch and call; echoes calls back as text by default.
#[derive(Default)]
pub(crate) struct FakeUpstream {
    tools: Vec<Tool>,
    list_delay: Option<Duration>,
    call_delay: Option<Duration>,
    /// Consumed one per fetch before any fetch succeeds.
    list_failures: Mutex<VecDeque<UpstreamError>>,
    call_error: Option<McpError>,
    list_calls: AtomicUsize,
    calls: Mutex<Vec<CallToolRequestParam>>,
}

impl FakeUpstream {
    pub(crate) fn new(tools: Vec<Tool>) -> Self {
        Self {
            tools,
            ..Self::default()
        }
    }

    pub(crate) fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = Some(delay);
        self
    }

    pub(crate) fn with_call_delay(mut self, delay: Duration) -> Self {
        self.call_delay = Some(delay);
        self
    }

    pub(crate) fn failing_first_list(self, err: UpstreamError) -> Self {
        self.list_failures
            .lock()
            .expect("list failures lock")
            .push_back(err);
        self
    }

    pub(crate) fn with_call_error(mut self, err: McpError) -> Self {
        self.call_error = Some(err);
        self
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn calls(&self) -> Vec<CallToolRequestParam> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl UpstreamSource for FakeUpstream {
    async fn list_operations(&self) -> Result<Vec<Tool>, UpstreamError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        let failure = self
            .list_failures
            .lock()
            .expect("list failures lock")
            .pop_front();
        match failure {
            Some(err) => Err(err),
            None => Ok(self.tools.clone()),
        }
    }

    async fn invoke_operation(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, UpstreamError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(request.clone());
        if let Some(delay) = self.call_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = &self.call_error {
            return Err(UpstreamError::Remote(err.clone()));
        }
        let arguments = serde_json::Value::Object(request.arguments.unwrap_or_default());
        Ok(CallToolResult::success(vec![Content::text(format!(
            "{} {arguments}",
            request.name
        ))]))
    }
}
