//! Checklist store backed by a single file
//!
//! Every operation reads the whole file, mutates the list in memory and, when
//! something changed, rewrites the whole file. Nothing is cached between calls.
//!
//! Mutations on the same file are serialized through a per-path async lock
//! shared by every store in the process. Listing does not take the lock; writes
//! go through a sibling temp file and a rename so readers never see a partial
//! file. A symlinked checklist is written through to its target.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::Permissions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tokio::fs;
use tokio::sync::Mutex as AsyncMutex;

use crate::codec;
use crate::config::TodoConfig;
use crate::types::{TodoError, TodoItem, TodoResult};

type FileLock = Arc<AsyncMutex<()>>;

static FILE_LOCKS: OnceLock<Mutex<HashMap<PathBuf, FileLock>>> = OnceLock::new();

fn file_lock(path: &Path) -> FileLock {
    let mut locks = FILE_LOCKS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    locks.entry(path.to_path_buf()).or_default().clone()
}

/// Hidden sibling of `target` used for the write-then-rename
fn temp_path(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}

async fn replace(
    tmp_path: &Path,
    target: &Path,
    content: &str,
    permissions: Option<Permissions>,
) -> TodoResult<()> {
    fs::write(tmp_path, content.as_bytes())
        .await
        .map_err(|e| TodoError::io(tmp_path, e))?;

    if let Some(permissions) = permissions {
        fs::set_permissions(tmp_path, permissions)
            .await
            .map_err(|e| TodoError::io(tmp_path, e))?;
    }

    fs::rename(tmp_path, target)
        .await
        .map_err(|e| TodoError::io(target, e))
}

/// First item whose name contains `keyword` (case-sensitive)
fn position_of(items: &[TodoItem], keyword: &str) -> Option<usize> {
    items.iter().position(|item| item.name.contains(keyword))
}

/// Store for one checklist file
#[derive(Clone, Debug)]
pub struct TodoStore {
    workspace: PathBuf,
    path: PathBuf,
    lock: FileLock,
}

impl TodoStore {
    pub fn new(config: &TodoConfig) -> Self {
        let path = config.todo_path();
        let workspace = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.workspace.clone());
        let lock = file_lock(&path);

        Self {
            workspace,
            path,
            lock,
        }
    }

    /// Directory the checklist lives in
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file. A missing file is an empty list.
    ///
    /// Invalid UTF-8 is replaced rather than failing every call on the file.
    pub async fn load(&self) -> TodoResult<Vec<TodoItem>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "Checklist file missing, using empty list"
                );
                Vec::new()
            }
            Err(e) => return Err(TodoError::io(&self.path, e)),
        };

        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            tracing::warn!(
                path = %self.path.display(),
                "Checklist is not valid UTF-8, decoding lossily"
            );
        }

        let items = codec::decode(&text);
        tracing::debug!(path = %self.path.display(), count = items.len(), "Loaded checklist");
        Ok(items)
    }

    /// File that writes land on: the link target when the checklist is a symlink
    async fn write_target(&self) -> TodoResult<PathBuf> {
        match fs::canonicalize(&self.path).await {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == ErrorKind::NotFound => match fs::read_link(&self.path).await {
                // Dangling link: create the file it points at
                Ok(link) => Ok(self.workspace.join(link)),
                Err(_) => Ok(self.path.clone()),
            },
            Err(e) => Err(TodoError::io(&self.path, e)),
        }
    }

    /// Encode and overwrite the whole file.
    ///
    /// The existing file's permissions carry over to the replacement, and a
    /// read-only file is refused rather than replaced.
    async fn persist(&self, items: &[TodoItem]) -> TodoResult<()> {
        let content = codec::encode(items);
        let target = self.write_target().await?;

        let permissions = match fs::metadata(&target).await {
            Ok(metadata) => Some(metadata.permissions()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(TodoError::io(&target, e)),
        };
        if permissions.as_ref().is_some_and(|p| p.readonly()) {
            return Err(TodoError::io(
                &target,
                std::io::Error::new(ErrorKind::PermissionDenied, "checklist file is read-only"),
            ));
        }

        let tmp_path = temp_path(&target);
        if let Err(e) = replace(&tmp_path, &target, &content, permissions).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e);
        }

        tracing::debug!(path = %target.display(), count = items.len(), "Wrote checklist");
        Ok(())
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// All items in file order
    pub async fn list(&self) -> TodoResult<Vec<TodoItem>> {
        self.load().await
    }

    /// Append an unchecked item
    pub async fn add(&self, name: &str) -> TodoResult<TodoItem> {
        let _guard = self.lock.lock().await;

        let mut items = self.load().await?;
        let item = TodoItem::new(name);
        items.push(item.clone());
        self.persist(&items).await?;

        tracing::info!(name = %item.name, total = items.len(), "Added to-do item");
        Ok(item)
    }

    /// Flip the first item matching `keyword`.
    ///
    /// Returns the item in its new state, or `None` without touching the file.
    pub async fn toggle(&self, keyword: &str) -> TodoResult<Option<TodoItem>> {
        let _guard = self.lock.lock().await;

        let mut items = self.load().await?;
        let Some(index) = position_of(&items, keyword) else {
            tracing::info!(keyword, "No to-do item to toggle");
            return Ok(None);
        };

        items[index].is_checked = !items[index].is_checked;
        let item = items[index].clone();
        self.persist(&items).await?;

        tracing::info!(name = %item.name, checked = item.is_checked, "Toggled to-do item");
        Ok(Some(item))
    }

    /// Delete the first item matching `keyword`.
    ///
    /// Returns the removed item, or `None` without touching the file.
    pub async fn remove(&self, keyword: &str) -> TodoResult<Option<TodoItem>> {
        let _guard = self.lock.lock().await;

        let mut items = self.load().await?;
        let Some(index) = position_of(&items, keyword) else {
            tracing::info!(keyword, "No to-do item to remove");
            return Ok(None);
        };

        let item = items.remove(index);
        self.persist(&items).await?;

        tracing::info!(name = %item.name, total = items.len(), "Removed to-do item");
        Ok(Some(item))
    }
}
