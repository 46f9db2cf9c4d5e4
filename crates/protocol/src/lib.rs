//! Payload contracts for the toolgate introspection tools.
//!
//! Every introspection tool answers with one of these structs serialized as pretty JSON inside a
//! single text content item.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod category;

pub use category::Category;

pub const BLOCKED_TOOLS_HINT: &str =
    "To enable a tool, add its name to the 'allowedTools' list in config.yaml and restart the server.";

pub const BLOCKED_SEARCH_SUGGESTION: &str =
    "Some tools are blocked. Add them to config.yaml to enable.";

pub const TOOL_NOT_FOUND_MESSAGE: &str = "This tool does not exist in the upstream GitHub MCP.";

/// Remediation line for a blocked tool.
pub fn how_to_enable(tool_name: &str) -> String {
    format!("Add \"- {tool_name}\" to allowedTools in config.yaml and restart the server.")
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ToolSummary {
    pub name: String,
    pub description: String,
    pub is_allowed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ListAllToolsResult {
    pub total_count: usize,
    pub allowed_count: usize,
    pub blocked_count: usize,
    pub tools: Vec<ToolSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct BlockedTool {
    pub name: String,
    pub description: String,
    pub category: Category,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ListBlockedToolsResult {
    pub count: usize,
    pub tools: Vec<BlockedTool>,
    pub hint: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    /// The query matched the tool name.
    High,
    /// The query matched the description only.
    Medium,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SearchHit {
    pub name: String,
    pub description: String,
    pub is_allowed: bool,
    pub relevance: Relevance,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SearchToolsResult {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub suggestion: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Allowed,
    Blocked,
    NotFound,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ToolDetails {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
    pub is_allowed: bool,
    pub status: ToolStatus,
    /// `null` when the tool is already allowed.
    pub how_to_enable: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ToolNotFound {
    pub name: String,
    pub status: ToolStatus,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ToolInfoResult {
    Found(ToolDetails),
    NotFound(ToolNotFound),
}

impl ToolInfoResult {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(ToolNotFound {
            name: name.into(),
            status: ToolStatus::NotFound,
            message: TOOL_NOT_FOUND_MESSAGE.to_string(),
        })
    }

    pub fn status(&self) -> ToolStatus {
        match self {
            Self::Found(details) => details.status,
            Self::NotFound(missing) => missing.status,
        }
    }
}

/// Caller-misuse payload (missing or malformed arguments). Returned as tool content, not as a
/// protocol error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ArgumentError {
    pub error: String,
}

impl ArgumentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Pretty JSON with two-space indentation, the format every introspection tool emits.
pub fn render_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
