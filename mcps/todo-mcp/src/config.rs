//! Startup configuration
//!
//! The workspace directory is a required positional argument. Editors register
//! the server with `args = ["${workspaceFolder}", "${workspaceFolder}"]`, so any
//! trailing positionals are accepted and ignored.

use clap::Parser;
use std::path::{Component, Path, PathBuf};

use crate::types::{TodoError, TodoResult};

pub const DEFAULT_FILE_NAME: &str = "TODO.md";

#[derive(Debug, Parser)]
#[command(name = "todo-mcp")]
#[command(about = "MCP server for a TODO.md checklist", version)]
pub struct Cli {
    /// Directory containing the checklist file
    #[arg(value_name = "WORKSPACE")]
    pub workspace: PathBuf,

    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Checklist file name inside the workspace
    #[arg(long = "file", env = "TODO_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,
}

/// Resolved configuration handed to the store
#[derive(Debug, Clone)]
pub struct TodoConfig {
    pub workspace: PathBuf,
    pub file_name: String,
}

impl TodoConfig {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self::new(cli.workspace).with_file_name(cli.file_name)
    }

    /// Check the workspace is a directory and the file name stays inside it
    pub fn validate(&self) -> TodoResult<()> {
        if !self.workspace.is_dir() {
            return Err(TodoError::Config(format!(
                "workspace {} is not a directory",
                self.workspace.display()
            )));
        }

        let mut components = Path::new(&self.file_name).components();
        let single = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single {
            return Err(TodoError::Config(format!(
                "file name must be a single path component, got {:?}",
                self.file_name
            )));
        }

        Ok(())
    }

    /// Absolute path to the checklist file
    pub fn todo_path(&self) -> PathBuf {
        let workspace = std::fs::canonicalize(&self.workspace)
            .unwrap_or_else(|_| self.workspace.clone());
        workspace.join(&self.file_name)
    }
}
