use super::GatewayService;
use crate::policy::AccessPolicy;
use crate::test_support::{tool, FakeUpstream};
use rmcp::model::{CallToolRequestParam, CallToolResult, JsonObject};
use serde_json::Value;
use std::sync::Arc;


/// `list_issues` allowed; `create_issue` blocked.
fn issue_catalog() -> Vec<rmcp::model::Tool> {
    vec![
        tool("list_issues", "List issues in a repository"),
        tool("create_issue", "Create a new issue"),
    ]
}

fn gateway(allowed: &[&str], upstream: FakeUpstream) -> (GatewayService, Arc<FakeUpstream>) {
    let upstream = Arc::new(upstream);
    let policy = AccessPolicy::from_names(allowed.iter().copied()).unwrap();
    (GatewayService::new(policy, upstream.clone()), upstream)
}

fn request(name: &str, arguments: Value) -> CallToolRequestParam {
    let arguments: Option<JsonObject> = match arguments {
        Value::Object(map) => Some(map),
        Value::Null => None,
        other => panic!("arguments must be an object, got {other}"),
    };
    CallToolRequestParam {
        name: name.to_string().into(),
        arguments,
    }
}

fn first_text(result: &CallToolResult) -> &str {
    result
        .content
        .first()
        .and_then(|content| content.as_text())
        .map(|text| text.text.as_str())
        .expect("text content")
}

/// Call a discovery tool and decode its JSON payload.
async fn call_json(service: &GatewayService, name: &str, arguments: Value) -> Value {
    let result = service
        .invoke(request(name, arguments))
        .await
        .expect("discovery tools never fail at the protocol level");
    assert_eq!(result.content.len(), 1);
    serde_json::from_str(first_text(&result)).expect("pretty JSON payload")
}
