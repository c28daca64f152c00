//! Result helpers for MCP tool responses

use rmcp::model::{CallToolResult, Content};

/// Successful response carrying a single text block.
///
/// An empty string is still a successful response, e.g. listing an empty
/// collection.
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
