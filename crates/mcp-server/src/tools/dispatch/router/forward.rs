use super::super::GatewayService;
use crate::upstream::with_deadline;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::ErrorData as McpError;

/// Relay an allowed call to the upstream. The upstream result, including `isError` results and
/// protocol errors, comes back unmodified.
pub(in crate::tools::dispatch) async fn forward(
    service: &GatewayService,
    request: CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let request = CallToolRequestParam {
        name: request.name,
        arguments: Some(request.arguments.unwrap_or_default()),
    };
    let result = with_deadline(
        service.call_timeout,
        service.upstream.invoke_operation(request),
    )
    .await?;
    Ok(result)
}
