//! Handler implementations for todo-mcp tools
//!
//! Each handler validates its params, runs one store operation and renders the
//! outcome as a plain-text tool result. A keyword that matches nothing is a
//! normal result, not an MCP error; only I/O failures surface as errors.

use mcp_common::{invalid_params, text_success, CallToolResult, McpError, ResultExt};

use crate::params::*;
use crate::store::TodoStore;
use crate::types::TodoItem;

const CHECKED_ICON: &str = "✅";
const UNCHECKED_ICON: &str = "❎";

/// One `<icon> <name>` line per item
pub fn render_list(items: &[TodoItem]) -> String {
    items
        .iter()
        .map(|item| {
            let icon = if item.is_checked {
                CHECKED_ICON
            } else {
                UNCHECKED_ICON
            };
            format!("{icon} {}", item.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn not_found(keyword: &str) -> CallToolResult {
    text_success(format!("To-do item containing \"{keyword}\" not found."))
}

/// Trimmed name, rejected when empty or multi-line
fn validate_name(name: &str) -> Result<&str, McpError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid_params("name cannot be empty"));
    }
    if name.contains(['\n', '\r']) {
        return Err(invalid_params("name cannot contain line breaks"));
    }
    Ok(name)
}

// ============================================================================
// Handler Functions
// ============================================================================

pub async fn list_todos(store: &TodoStore) -> Result<CallToolResult, McpError> {
    let items = store.list().await.to_mcp_err()?;
    Ok(text_success(render_list(&items)))
}

pub async fn add_todo(
    store: &TodoStore,
    params: AddTodoParams,
) -> Result<CallToolResult, McpError> {
    let name = validate_name(&params.name)?;
    let item = store.add(name).await.to_mcp_err()?;

    Ok(text_success(format!(
        "Added new to-do item: {} to {}",
        item.name,
        store.workspace().display()
    )))
}

pub async fn toggle_todo(
    store: &TodoStore,
    params: ToggleTodoParams,
) -> Result<CallToolResult, McpError> {
    let toggled = store.toggle(&params.keyword).await.to_mcp_err()?;

    Ok(match toggled {
        Some(item) => text_success(format!(
            "Toggled to-do item \"{}\" to {}.",
            item.name,
            item.state_label()
        )),
        None => not_found(&params.keyword),
    })
}

pub async fn remove_todo(
    store: &TodoStore,
    params: RemoveTodoParams,
) -> Result<CallToolResult, McpError> {
    let removed = store.remove(&params.keyword).await.to_mcp_err()?;

    Ok(match removed {
        Some(item) => text_success(format!("Removed to-do item \"{}\".", item.name)),
        None => not_found(&params.keyword),
    })
}
