use super::description_of;
use crate::policy::AccessPolicy;
use rmcp::model::Tool;
use toolgate_protocol::{ListAllToolsResult, ToolSummary};

/// Every upstream tool, in upstream order, with its policy status.
pub(in crate::tools::dispatch) fn list_all_upstream_tools(
    policy: &AccessPolicy,
    catalog: &[Tool],
) -> ListAllToolsResult {
    let tools: Vec<ToolSummary> = catalog
        .iter()
        .map(|tool| ToolSummary {
            name: tool.name.to_string(),
            description: description_of(tool),
            is_allowed: policy.is_allowed(&tool.name),
        })
        .collect();
    let allowed_count = tools.iter().filter(|tool| tool.is_allowed).count();

    ListAllToolsResult {
        total_count: tools.len(),
        allowed_count,
        blocked_count: tools.len() - allowed_count,
        tools,
    }
}
