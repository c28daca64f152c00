//! Todo MCP Library
//!
//! A markdown checklist (`TODO.md`) in a workspace directory, exposed as MCP
//! tools: `list-todos`, `add-todo`, `toggle-todo` and `remove-todo`.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use todo_mcp::{EmbeddableMcp, TodoConfig, TodoMcpServer};
//!
//! let server = TodoMcpServer::new(TodoConfig::new("/path/to/workspace"))?;
//! server.call_tool("add-todo", serde_json::json!({ "name": "Buy milk" })).await?;
//! ```
//!
//! # Usage as Binary
//!
//! ```json
//! { "mcpServers": { "to-do": { "command": "todo-mcp", "args": ["${workspaceFolder}"] } } }
//! ```
//!
//! The file is the only state: each tool call reads it, applies one change and
//! writes it back. [`TodoStore`] can be used directly without MCP.

pub mod codec;
pub mod config;
pub mod handlers;
pub mod params;
pub mod server;
pub mod store;
pub mod types;

pub use config::TodoConfig;
pub use server::TodoMcpServer;
pub use store::TodoStore;
pub use types::{TodoError, TodoItem, TodoResult};

pub use params::*;

pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
