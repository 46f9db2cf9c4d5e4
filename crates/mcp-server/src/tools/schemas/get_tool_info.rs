use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub(crate) struct GetToolInfoRequest {
    #[serde(default)]
    pub(crate) tool_name: Option<String>,
}
