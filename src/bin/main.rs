use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use research_desk::tools::{Caller, ToolContext};
use research_desk::{DeskConfig, ToolInvocation, create_server};

// rmcp imports for MCP stdio server mode
use rmcp::service::ServiceExt;
use rmcp::transport::stdio;

#[derive(Parser)]
#[command(name = "research-desk")]
#[command(about = "Market research article desk driven over MCP")]
struct Cli {
    /// Path to desk.json (defaults to $XDG_CONFIG_HOME/research-desk/desk.json or ./desk.json)
    #[arg(long, global = true, env = "DESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as an MCP stdio server (for use in mcp.json)
    McpStdio,
    /// Run as an MCP HTTP server
    McpHttp {
        /// Bind address, e.g. 0.0.0.0:3943
        #[arg(long, default_value = "127.0.0.1:3943")]
        bind: String,
    },
    /// Print the registered tools and their input schemas
    ListTools,
    /// Dispatch one tool call against a fresh desk and print the result
    Call {
        name: String,
        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the stdio transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("research_desk=info".parse()?)
                .add_directive("rmcp=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DeskConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::McpStdio => {
            info!("Starting MCP stdio server (rmcp)");
            let server = create_server(config)?;

            // Run as an MCP stdio server. DeskServer implements ServerHandler.
            let service = server
                .as_ref()
                .clone()
                .serve(stdio())
                .await
                .inspect_err(|e| tracing::error!("serving error: {:?}", e))?;

            // Block until the MCP session ends.
            service.waiting().await?;
            info!("MCP stdio server session ended");
        }
        Commands::McpHttp { bind } => {
            info!("Starting MCP HTTP server (rmcp) on {}", bind);
            let server = create_server(config)?;
            research_desk::server::start_mcp_http(server, &bind).await?;
        }
        Commands::ListTools => {
            let server = create_server(config)?;
            let (tools, _) = server.tool_registry().list_tools(None);
            println!("{}", serde_json::to_string_pretty(&tools)?);
        }
        Commands::Call { name, args } => {
            let arguments: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            let server = create_server(config)?;
            let ctx = ToolContext::new(Caller::Cli);

            match server
                .tool_registry()
                .dispatch(ToolInvocation::new(name, arguments), &ctx)
                .await
            {
                Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                Err(e) => anyhow::bail!(e),
            }
            server.desk().auto_scroller().stop().await;
        }
    }

    Ok(())
}
