// Per-tool handlers behind `GatewayService::invoke`.

pub(super) mod error;
pub(super) mod forward;
pub(super) mod get_tool_info;
pub(super) mod list_all_upstream_tools;
pub(super) mod list_blocked_tools;
pub(super) mod search_upstream_tools;

use super::GatewayService;
use crate::tools::catalog::MetaTool;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use rmcp::ErrorData as McpError;
use serde::de::DeserializeOwned;
use toolgate_protocol::ArgumentError;

use self::error::text_result;

/// Answer a discovery tool from the catalog snapshot.
pub(super) async fn call_meta_tool(
    service: &GatewayService,
    tool: MetaTool,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let catalog = service.catalog().await?;
    let policy = service.policy();

    match tool {
        MetaTool::ListAllUpstreamTools => text_result(
            &list_all_upstream_tools::list_all_upstream_tools(policy, &catalog),
        ),
        MetaTool::ListBlockedTools => match parse_args(tool, arguments) {
            Ok(request) => text_result(&list_blocked_tools::list_blocked_tools(
                policy, &catalog, request,
            )),
            Err(err) => text_result(&err),
        },
        MetaTool::SearchUpstreamTools => {
            match parse_args(tool, arguments).and_then(|request| {
                search_upstream_tools::search_upstream_tools(policy, &catalog, request)
            }) {
                Ok(result) => text_result(&result),
                Err(err) => text_result(&err),
            }
        }
        MetaTool::GetToolInfo => {
            match parse_args(tool, arguments)
                .and_then(|request| get_tool_info::get_tool_info(policy, &catalog, request))
            {
                Ok(result) => text_result(&result),
                Err(err) => text_result(&err),
            }
        }
    }
}

/// Decode tool arguments. Absent arguments decode as the request's default.
pub(super) fn parse_args<T>(tool: MetaTool, arguments: Option<JsonObject>) -> Result<T, ArgumentError>
where
    T: DeserializeOwned + Default,
{
    let Some(arguments) = arguments else {
        return Ok(T::default());
    };
    serde_json::from_value(serde_json::Value::Object(arguments)).map_err(|err| {
        ArgumentError::new(format!("Invalid arguments for {}: {err}", tool.name()))
    })
}

/// Upstream description, `""` when the upstream left it out.
pub(super) fn description_of(tool: &Tool) -> String {
    tool.description
        .as_deref()
        .map(str::to_string)
        .unwrap_or_default()
}
