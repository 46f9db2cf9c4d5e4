use rmcp::model::{JsonObject, Tool};
use serde_json::{json, Value};
use toolgate_protocol::Category;

/// The locally answered discovery tools. They are always listed and always callable, whatever the
/// access policy says.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum MetaTool {
    ListAllUpstreamTools,
    ListBlockedTools,
    SearchUpstreamTools,
    GetToolInfo,
}

impl MetaTool {
    pub(crate) const ALL: [MetaTool; 4] = [
        MetaTool::ListAllUpstreamTools,
        MetaTool::ListBlockedTools,
        MetaTool::SearchUpstreamTools,
        MetaTool::GetToolInfo,
    ];

    pub(crate) const fn name(self) -> &'static str {
        match self {
            MetaTool::ListAllUpstreamTools => "list_all_upstream_tools",
            MetaTool::ListBlockedTools => "list_blocked_tools",
            MetaTool::SearchUpstreamTools => "search_upstream_tools",
            MetaTool::GetToolInfo => "get_tool_info",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// One-liner for the server instructions.
    pub(crate) const fn summary(self) -> &'static str {
        match self {
            MetaTool::ListAllUpstreamTools => "Every upstream tool with its allowed/blocked status.",
            MetaTool::ListBlockedTools => "Blocked upstream tools, optionally by category.",
            MetaTool::SearchUpstreamTools => "Keyword search over upstream tool names and descriptions.",
            MetaTool::GetToolInfo => "Parameters and status of one tool, plus how to enable it.",
        }
    }

    pub(crate) const fn description(self) -> &'static str {
        match self {
            MetaTool::ListAllUpstreamTools => {
                "List all tools available in the upstream GitHub MCP (both allowed and blocked). Use this to discover what tools exist."
            }
            MetaTool::ListBlockedTools => {
                "List tools that are available in upstream GitHub MCP but currently blocked by the whitelist. Use this when you need a tool that isn't available."
            }
            MetaTool::SearchUpstreamTools => {
                "Search for tools in the upstream GitHub MCP by keyword. Use this to find tools that might help with a specific task."
            }
            MetaTool::GetToolInfo => {
                "Get detailed information about a specific tool, including its parameters and whether it's currently allowed."
            }
        }
    }

    pub(crate) fn input_schema(self) -> JsonObject {
        let schema = match self {
            MetaTool::ListAllUpstreamTools => json!({
                "type": "object",
                "properties": {},
                "required": [],
            }),
            MetaTool::ListBlockedTools => {
                let categories: Vec<&str> = Category::SCHEMA_ORDER
                    .iter()
                    .map(|category| category.as_str())
                    .collect();
                json!({
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Filter by category: issue, pr, repo, branch, commit, release, etc.",
                            "enum": categories,
                        },
                    },
                    "required": [],
                })
            }
            MetaTool::SearchUpstreamTools => json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search keyword (searches tool names and descriptions)",
                    },
                    "include_allowed": {
                        "type": "boolean",
                        "description": "Include already allowed tools in results (default: true)",
                    },
                },
                "required": ["query"],
            }),
            MetaTool::GetToolInfo => json!({
                "type": "object",
                "properties": {
                    "tool_name": {
                        "type": "string",
                        "description": "The name of the tool to get info about",
                    },
                },
                "required": ["tool_name"],
            }),
        };
        match schema {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        }
    }

    pub(crate) fn descriptor(self) -> Tool {
        Tool::new(self.name(), self.description(), self.input_schema())
    }
}

pub(crate) fn meta_tool_descriptors() -> Vec<Tool> {
    MetaTool::ALL.into_iter().map(MetaTool::descriptor).collect()
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Toolgate exposes a whitelisted subset of the upstream GitHub MCP tools.".to_string(),
        "Blocked tools cannot be called; use the discovery tools below to find them and learn how to enable them."
            .to_string(),
        "Discovery tools:".to_string(),
    ];
    for tool in MetaTool::ALL {
        lines.push(format!("- {}: {}", tool.name(), tool.summary()));
    }
    lines.join("\n")
}
