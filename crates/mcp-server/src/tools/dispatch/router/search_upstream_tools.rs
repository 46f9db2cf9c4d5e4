use super::description_of;
use crate::policy::AccessPolicy;
use crate::tools::schemas::search_upstream_tools::SearchUpstreamToolsRequest;
use rmcp::model::Tool;
use toolgate_protocol::{
    ArgumentError, Relevance, SearchHit, SearchToolsResult, BLOCKED_SEARCH_SUGGESTION,
};

/// Case-insensitive substring search over names and descriptions. Hits keep upstream order.
pub(in crate::tools::dispatch) fn search_upstream_tools(
    policy: &AccessPolicy,
    catalog: &[Tool],
    request: SearchUpstreamToolsRequest,
) -> Result<SearchToolsResult, ArgumentError> {
    let query = match request.query {
        Some(query) if !query.is_empty() => query,
        _ => return Err(ArgumentError::new("Query parameter is required")),
    };
    let include_allowed = request.include_allowed.unwrap_or(true);
    let needle = query.to_lowercase();

    let mut results = Vec::new();
    for tool in catalog {
        let is_allowed = policy.is_allowed(&tool.name);
        if is_allowed && !include_allowed {
            continue;
        }
        let description = description_of(tool);
        let relevance = if tool.name.to_lowercase().contains(&needle) {
            Relevance::High
        } else if description.to_lowercase().contains(&needle) {
            Relevance::Medium
        } else {
            continue;
        };
        results.push(SearchHit {
            name: tool.name.to_string(),
            description,
            is_allowed,
            relevance,
        });
    }

    let suggestion = results
        .iter()
        .any(|hit| !hit.is_allowed)
        .then(|| BLOCKED_SEARCH_SUGGESTION.to_string());

    Ok(SearchToolsResult {
        query,
        results,
        suggestion,
    })
}
