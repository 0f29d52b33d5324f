// Core modules
pub mod config;
pub mod types;
pub mod companies;
pub mod generate;
pub mod article;

// Desk state and the tool surface
pub mod state;
pub mod autoscroll;
pub mod tools;
mod resources;
pub mod server;

// Re-export key types and functions
pub use config::DeskConfig;
pub use resources::{DeskResources, ResourceError};
pub use server::DeskServer;
pub use state::{DeskContext, DeskState};
pub use tools::{
    ToolError, ToolHandler, ToolInvocation, ToolRegistry, ToolResult, default_registry,
};

use std::sync::Arc;
use anyhow::Result;

/// Convenience function to create a fully configured MCP server.
///
/// This creates the desk session, registers the default tools, and returns
/// a DeskServer that implements rmcp's ServerHandler.
pub fn create_server(config: DeskConfig) -> Result<Arc<DeskServer>> {
    let desk = DeskContext::new(config);
    let tool_registry = Arc::new(default_registry(&desk)?);
    tracing::info!(tools = tool_registry.len(), "Tool registry ready");
    Ok(Arc::new(DeskServer::new(desk, tool_registry)))
}
