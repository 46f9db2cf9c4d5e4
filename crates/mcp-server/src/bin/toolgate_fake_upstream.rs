//! Minimal stand-in for the GitHub MCP server, used by the integration tests.
//!
//! Each tool echoes its name and arguments back as text so callers can check that a call arrived
//! unmodified.

use anyhow::Result;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::transport::stdio;
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use rmcp::ServiceExt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
struct RepoRequest {
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
struct CreateIssueRequest {
    owner: String,
    repo: String,
    /// Issue title
    title: String,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
struct FileRequest {
    owner: String,
    repo: String,
    /// Path inside the repository
    path: String,
}

#[derive(Clone)]
struct FakeGithub {
    tool_router: ToolRouter<Self>,
}

fn echo<T: Serialize>(tool: &str, request: &T) -> Result<CallToolResult, McpError> {
    let arguments = serde_json::to_string(request)
        .map_err(|err| McpError::internal_error(err.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(format!(
        "{tool} {arguments}"
    ))]))
}

#[tool_router]
impl FakeGithub {
    fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List issues in a GitHub repository")]
    async fn list_issues(
        &self,
        Parameters(request): Parameters<RepoRequest>,
    ) -> Result<CallToolResult, McpError> {
        echo("list_issues", &request)
    }

    #[tool(description = "Create a new issue in a GitHub repository")]
    async fn create_issue(
        &self,
        Parameters(request): Parameters<CreateIssueRequest>,
    ) -> Result<CallToolResult, McpError> {
        echo("create_issue", &request)
    }

    #[tool(description = "Get the contents of a file or directory from a GitHub repository")]
    async fn get_file_contents(
        &self,
        Parameters(request): Parameters<FileRequest>,
    ) -> Result<CallToolResult, McpError> {
        if request.path.is_empty() {
            return Err(McpError::invalid_params("path must not be empty", None));
        }
        echo("get_file_contents", &request)
    }
}

#[tool_handler]
impl ServerHandler for FakeGithub {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let server = FakeGithub::new().serve(stdio()).await?;
    server.waiting().await?;
    Ok(())
}
