//! Error conversion for MCP tool implementations
//!
//! Tools return `Result<CallToolResult, McpError>`. Domain errors implement
//! [`IntoMcpError`] so handlers can use `.to_mcp_err()?` on any fallible call.

use rmcp::ErrorData as McpError;

pub type McpResult<T> = Result<T, McpError>;

/// Conversion of an error into an MCP error
///
/// ```rust,ignore
/// impl IntoMcpError for StoreError {
///     fn into_mcp_error(self) -> McpError {
///         internal_error(self.to_string())
///     }
/// }
/// ```
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

/// `.to_mcp_err()` for any `Result` whose error implements [`IntoMcpError`]
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> McpResult<T>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> McpResult<T> {
        self.map_err(IntoMcpError::into_mcp_error)
    }
}

/// Server-side failure (I/O, corrupt state)
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// The caller sent arguments the tool cannot accept
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
