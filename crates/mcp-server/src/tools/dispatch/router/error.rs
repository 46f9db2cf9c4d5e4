use rmcp::model::{CallToolResult, Content, ErrorCode};
use rmcp::ErrorData as McpError;
use serde::Serialize;
use toolgate_protocol::render_json;

/// Wrap a payload as a single pretty JSON text item.
pub(in crate::tools::dispatch) fn text_result<T: Serialize>(
    payload: &T,
) -> Result<CallToolResult, McpError> {
    let text = render_json(payload)
        .map_err(|err| McpError::internal_error(format!("failed to render result: {err}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Protocol error for a call to a tool outside the whitelist.
pub(in crate::tools::dispatch) fn blocked_tool_error(tool_name: &str) -> McpError {
    McpError::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!(
            "Tool \"{tool_name}\" is not allowed. Use \"search_upstream_tools\" to find available tools."
        ),
        None,
    )
}
