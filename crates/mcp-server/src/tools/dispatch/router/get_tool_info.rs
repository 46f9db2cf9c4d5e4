use super::description_of;
use crate::policy::AccessPolicy;
use crate::tools::schemas::get_tool_info::GetToolInfoRequest;
use rmcp::model::Tool;
use serde_json::Value;
use toolgate_protocol::{how_to_enable, ArgumentError, ToolDetails, ToolInfoResult, ToolStatus};

/// Detail for one upstream tool by exact name.
pub(in crate::tools::dispatch) fn get_tool_info(
    policy: &AccessPolicy,
    catalog: &[Tool],
    request: GetToolInfoRequest,
) -> Result<ToolInfoResult, ArgumentError> {
    let name = match request.tool_name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ArgumentError::new("tool_name parameter is required")),
    };

    let Some(tool) = catalog.iter().find(|tool| tool.name == name.as_str()) else {
        return Ok(ToolInfoResult::not_found(name));
    };

    let is_allowed = policy.is_allowed(&name);
    Ok(ToolInfoResult::Found(ToolDetails {
        description: description_of(tool),
        input_schema: Value::Object(tool.input_schema.as_ref().clone()),
        is_allowed,
        status: if is_allowed {
            ToolStatus::Allowed
        } else {
            ToolStatus::Blocked
        },
        how_to_enable: (!is_allowed).then(|| how_to_enable(&name)),
        name,
    }))
}
