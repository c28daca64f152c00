//! End-to-end tool calls against a temporary workspace
//!
//! Drives the server through `EmbeddableMcp::call_tool`, the same dispatch an
//! embedding host uses, and checks both the response text and the file.

use rmcp::model::{CallToolResult, RawContent};
use serde_json::json;
use tempfile::TempDir;
use todo_mcp::{EmbeddableError, EmbeddableMcp, TodoConfig, TodoMcpServer};

fn setup() -> (TempDir, TodoMcpServer) {
    let dir = tempfile::tempdir().unwrap();
    let server = TodoMcpServer::new(TodoConfig::new(dir.path())).unwrap();
    (dir, server)
}

fn text(result: &CallToolResult) -> &str {
    assert!(!result.is_error.unwrap_or(false));
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        other => panic!("expected text content, got {:?}", other),
    }
}

fn todo_file(server: &TodoMcpServer) -> String {
    std::fs::read_to_string(server.store().path()).unwrap_or_default()
}

#[tokio::test]
async fn list_on_fresh_workspace_is_empty() {
    let (_dir, server) = setup();

    let result = server.call_tool("list-todos", json!({})).await.unwrap();
    assert_eq!(text(&result), "");
}

#[tokio::test]
async fn add_reports_item_and_workspace() {
    let (_dir, server) = setup();

    let result = server
        .call_tool("add-todo", json!({ "name": "Buy milk" }))
        .await
        .unwrap();

    let expected = format!(
        "Added new to-do item: Buy milk to {}",
        server.store().workspace().display()
    );
    assert_eq!(text(&result), expected);
    assert_eq!(todo_file(&server), "- [ ] Buy milk");
}

#[tokio::test]
async fn add_trims_name() {
    let (_dir, server) = setup();

    server
        .call_tool("add-todo", json!({ "name": "  Walk dog \t" }))
        .await
        .unwrap();

    assert_eq!(todo_file(&server), "- [ ] Walk dog");
}

#[tokio::test]
async fn add_rejects_multiline_name() {
    let (_dir, server) = setup();

    let result = server
        .call_tool("add-todo", json!({ "name": "one\n- [x] two" }))
        .await;

    assert!(matches!(result, Err(EmbeddableError::McpError(_))));
    assert!(!server.store().path().exists());
}

#[tokio::test]
async fn full_lifecycle() {
    let (_dir, server) = setup();

    for name in ["Buy milk", "Walk dog"] {
        server
            .call_tool("add-todo", json!({ "name": name }))
            .await
            .unwrap();
    }

    let result = server
        .call_tool("toggle-todo", json!({ "keyword": "dog" }))
        .await
        .unwrap();
    assert_eq!(text(&result), "Toggled to-do item \"Walk dog\" to completed.");

    let result = server.call_tool("list-todos", json!({})).await.unwrap();
    assert_eq!(text(&result), "❎ Buy milk\n✅ Walk dog");

    let result = server
        .call_tool("toggle-todo", json!({ "keyword": "dog" }))
        .await
        .unwrap();
    assert_eq!(
        text(&result),
        "Toggled to-do item \"Walk dog\" to not completed."
    );

    let result = server
        .call_tool("remove-todo", json!({ "keyword": "milk" }))
        .await
        .unwrap();
    assert_eq!(text(&result), "Removed to-do item \"Buy milk\".");

    assert_eq!(todo_file(&server), "- [ ] Walk dog");
}

#[tokio::test]
async fn not_found_is_a_normal_result() {
    let (_dir, server) = setup();
    server
        .call_tool("add-todo", json!({ "name": "Buy milk" }))
        .await
        .unwrap();
    let before = todo_file(&server);

    let result = server
        .call_tool("toggle-todo", json!({ "keyword": "cat" }))
        .await
        .unwrap();
    assert_eq!(text(&result), "To-do item containing \"cat\" not found.");

    let result = server
        .call_tool("remove-todo", json!({ "keyword": "cat" }))
        .await
        .unwrap();
    assert_eq!(text(&result), "To-do item containing \"cat\" not found.");

    assert_eq!(todo_file(&server), before);
}

#[tokio::test]
async fn empty_keyword_matches_first_item() {
    let (_dir, server) = setup();
    for name in ["first", "second"] {
        server
            .call_tool("add-todo", json!({ "name": name }))
            .await
            .unwrap();
    }

    let result = server
        .call_tool("remove-todo", json!({ "keyword": "" }))
        .await
        .unwrap();

    assert_eq!(text(&result), "Removed to-do item \"first\".");
    assert_eq!(todo_file(&server), "- [ ] second");
}

#[tokio::test]
async fn existing_file_is_picked_up() {
    let (dir, server) = setup();
    std::fs::write(dir.path().join("TODO.md"), "- [x] done\n- [ ] open\n").unwrap();

    let result = server.call_tool("list-todos", json!({})).await.unwrap();
    assert_eq!(text(&result), "✅ done\n❎ open");
}

#[tokio::test]
async fn missing_keyword_is_rejected() {
    let (_dir, server) = setup();

    let result = server.call_tool("toggle-todo", json!({})).await;
    assert!(matches!(result, Err(EmbeddableError::SerdeError(_))));
}
