use super::description_of;
use crate::policy::AccessPolicy;
use crate::tools::schemas::list_blocked_tools::ListBlockedToolsRequest;
use rmcp::model::Tool;
use toolgate_protocol::{BlockedTool, Category, ListBlockedToolsResult, BLOCKED_TOOLS_HINT};

/// Blocked upstream tools, optionally narrowed to one category.
pub(in crate::tools::dispatch) fn list_blocked_tools(
    policy: &AccessPolicy,
    catalog: &[Tool],
    request: ListBlockedToolsRequest,
) -> ListBlockedToolsResult {
    let filter = CategoryFilter::new(request.category.as_deref());

    let tools: Vec<BlockedTool> = catalog
        .iter()
        .filter(|tool| !policy.is_allowed(&tool.name))
        .map(|tool| BlockedTool {
            name: tool.name.to_string(),
            description: description_of(tool),
            category: Category::infer(&tool.name),
        })
        .filter(|tool| filter.matches(tool.category))
        .collect();

    ListBlockedToolsResult {
        count: tools.len(),
        tools,
        hint: BLOCKED_TOOLS_HINT.to_string(),
    }
}

enum CategoryFilter {
    Any,
    Only(Category),
    /// A category name outside the enumeration; nothing can carry it.
    Unknown,
}

impl CategoryFilter {
    fn new(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => CategoryFilter::Any,
            Some(name) => Category::from_name(name)
                .map(CategoryFilter::Only)
                .unwrap_or(CategoryFilter::Unknown),
        }
    }

    fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(wanted) => *wanted == category,
            CategoryFilter::Unknown => false,
        }
    }
}
