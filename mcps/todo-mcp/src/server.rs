//! MCP Server implementation for the TODO.md checklist
//!
//! Tools keep the names editors already know (`list-todos`, `add-todo`,
//! `toggle-todo`, `remove-todo`). Handler implementations are in the handlers
//! module; the same server is reachable over stdio and in-process through
//! [`EmbeddableMcp`].

use clap::Parser;
use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::config::{Cli, TodoConfig};
use crate::handlers;
use crate::params::*;
use crate::store::TodoStore;
use crate::types::TodoResult;

const SERVER_NAME: &str = "to-do";

const INSTRUCTIONS: &str = "Manages a markdown checklist (TODO.md) in the workspace directory. \
     Items are matched by case-sensitive keyword; the first matching item is toggled or removed.";

/// The main Todo MCP Server
#[derive(Clone)]
pub struct TodoMcpServer {
    store: TodoStore,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl TodoMcpServer {
    /// Create a server for the checklist described by `config`
    pub fn new(config: TodoConfig) -> TodoResult<Self> {
        config.validate()?;
        Ok(Self::with_store(TodoStore::new(&config)))
    }

    /// Create a server from command-line arguments and the environment
    pub fn from_cli() -> anyhow::Result<Self> {
        let config = TodoConfig::from_cli(Cli::parse());
        Ok(Self::new(config)?)
    }

    pub fn with_store(store: TodoStore) -> Self {
        tracing::info!(path = %store.path().display(), "Serving checklist");
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    #[tool(
        name = "list-todos",
        description = "Lists all to-do items in the TODO.md file"
    )]
    async fn list_todos(&self) -> Result<CallToolResult, McpError> {
        handlers::list_todos(&self.store).await
    }

    #[tool(
        name = "add-todo",
        description = "Adds a new to-do item to the TODO.md file"
    )]
    async fn add_todo(
        &self,
        Parameters(params): Parameters<AddTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_todo(&self.store, params).await
    }

    #[tool(
        name = "toggle-todo",
        description = "Toggles the completion status of a to-do item"
    )]
    async fn toggle_todo(
        &self,
        Parameters(params): Parameters<ToggleTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::toggle_todo(&self.store, params).await
    }

    #[tool(
        name = "remove-todo",
        description = "Removes a to-do item from the TODO.md file"
    )]
    async fn remove_todo(
        &self,
        Parameters(params): Parameters<RemoveTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::remove_todo(&self.store, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TodoMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        };
        info.server_info.name = SERVER_NAME.into();
        info.server_info.version = env!("CARGO_PKG_VERSION").into();
        info
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for TodoMcpServer {
    fn server_name(&self) -> &str {
        SERVER_NAME
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "list-todos" => self.list_todos().await.map_err(Into::into),

            "add-todo" => {
                let params: AddTodoParams = serde_json::from_value(params)?;
                self.add_todo(Parameters(params)).await.map_err(Into::into)
            }

            "toggle-todo" => {
                let params: ToggleTodoParams = serde_json::from_value(params)?;
                self.toggle_todo(Parameters(params)).await.map_err(Into::into)
            }

            "remove-todo" => {
                let params: RemoveTodoParams = serde_json::from_value(params)?;
                self.remove_todo(Parameters(params)).await.map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
