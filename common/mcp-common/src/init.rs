//! Server initialization: tracing setup and the `serve_stdio!` macro

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Output goes to stderr because stdout carries the MCP protocol. `RUST_LOG`
/// is honored, with `<crate_name>=info` added as a default directive.
/// `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Generate a `#[tokio::main]` entry point that serves an MCP server on stdio.
///
/// `$constructor` is called with no arguments and must return
/// `Result<Server, E>` where `E` converts into `anyhow::Error`; a failure
/// aborts startup before the transport is opened.
///
/// ```rust,ignore
/// mcp_common::serve_stdio!(TodoMcpServer::from_cli, "todo_mcp");
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($constructor:expr, $crate_name:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = ($constructor)()?;
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}
