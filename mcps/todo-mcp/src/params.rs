//! Parameter definitions for todo-mcp tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddTodoParams {
    #[schemars(description = "The name of the to-do item")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToggleTodoParams {
    #[schemars(description = "A keyword in the name of the to-do item to toggle")]
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RemoveTodoParams {
    #[schemars(description = "A keyword in the name of the to-do item to remove")]
    pub keyword: String,
}
