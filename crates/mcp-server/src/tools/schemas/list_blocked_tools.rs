use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub(crate) struct ListBlockedToolsRequest {
    /// Category wire name. Unknown names match nothing; absent or empty means no filter.
    #[serde(default)]
    pub(crate) category: Option<String>,
}
