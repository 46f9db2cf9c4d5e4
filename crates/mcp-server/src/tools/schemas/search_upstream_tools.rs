use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub(crate) struct SearchUpstreamToolsRequest {
    /// Case-insensitive substring matched against names and descriptions.
    #[serde(default)]
    pub(crate) query: Option<String>,

    /// Include already allowed tools in the results (default: true).
    #[serde(default)]
    pub(crate) include_allowed: Option<bool>,
}
