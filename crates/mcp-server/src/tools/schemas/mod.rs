//! Argument shapes of the discovery tools.
//!
//! Every field is optional. A missing `query` or `tool_name` is answered with a structured
//! error payload by the handler, not rejected during deserialization.

pub(crate) mod get_tool_info;
pub(crate) mod list_blocked_tools;
pub(crate) mod search_upstream_tools;
