//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] and the `serve_stdio!` macro
//! - **Results**: [`text_success`] for plain-text tool responses
//! - **Errors**: [`IntoMcpError`] / [`ResultExt`] for `?` inside tools
//! - **Embeddable**: [`EmbeddableMcp`] for calling tools in-process
//!
//! # Example
//!
//! ```rust,ignore
//! // main.rs
//! mcp_common::serve_stdio!(MyServer::from_cli, "my_mcp");
//!
//! // a tool body
//! let text = std::fs::read_to_string(&path).to_mcp_err()?;
//! Ok(text_success(text))
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::init_tracing;
pub use result::text_success;

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
