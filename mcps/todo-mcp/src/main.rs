//! Todo MCP - TODO.md checklist for the workspace passed as the first argument

mcp_common::serve_stdio!(todo_mcp::TodoMcpServer::from_cli, "todo_mcp");
