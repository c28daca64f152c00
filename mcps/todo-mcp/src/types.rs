//! Type definitions for todo-mcp

use mcp_common::{internal_error, IntoMcpError, McpError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TodoItem {
    pub name: String,
    pub is_checked: bool,
}

impl TodoItem {
    /// New unchecked item
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_checked: false,
        }
    }

    pub fn checked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_checked: true,
        }
    }

    /// Human-readable completion state used in tool responses
    pub fn state_label(&self) -> &'static str {
        if self.is_checked {
            "completed"
        } else {
            "not completed"
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl TodoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TodoError::Io {
            path: path.into(),
            source,
        }
    }
}

impl IntoMcpError for TodoError {
    fn into_mcp_error(self) -> McpError {
        internal_error(self.to_string())
    }
}

pub type TodoResult<T> = Result<T, TodoError>;
