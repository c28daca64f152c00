//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! subprocess or a transport. Servers built with `#[tool_router]` implement it
//! by listing their router and dispatching on the tool name:
//!
//! ```rust,ignore
//! let server = TodoMcpServer::new(TodoConfig::new("/work"))?;
//! let result = server.call_tool("add-todo", json!({ "name": "Buy milk" })).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments did not deserialize into the tool's parameter type
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// The tool itself returned an MCP error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be invoked in-process.
///
/// Implementations must be `Send + Sync`; hosts may call tools concurrently.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name matching the server's MCP identity
    fn server_name(&self) -> &str;

    fn list_tools(&self) -> Vec<Tool>;

    /// Run tool `name` with a JSON object of arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
