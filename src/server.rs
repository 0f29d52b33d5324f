//! MCP server implementation using rmcp.
//!
//! `DeskServer` exposes the tool registry and the `desk://` resources over
//! MCP, on stdio or streamable HTTP. Every session served by one process
//! drives the same desk.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use axum::{Router, http::StatusCode, response::Json, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::*,
    service::{RequestContext, RoleServer},
};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::resources::DeskResources;
use crate::state::DeskContext;
use crate::tools::{
    Caller, ToolContext, ToolError, ToolInvocation, ToolOutcome, ToolRegistry, ToolResult,
};

/// MCP server that handles protocol requests and delegates to tool handlers.
#[derive(Clone)]
pub struct DeskServer {
    desk: DeskContext,
    tool_registry: Arc<ToolRegistry>,
    resources: DeskResources,
}

impl DeskServer {
    pub fn new(desk: DeskContext, tool_registry: Arc<ToolRegistry>) -> Self {
        let resources = DeskResources::new(desk.clone());
        Self {
            desk,
            tool_registry,
            resources,
        }
    }

    pub fn desk(&self) -> &DeskContext {
        &self.desk
    }

    pub fn tool_registry(&self) -> &Arc<ToolRegistry> {
        &self.tool_registry
    }
}

impl ServerHandler for DeskServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Research desk for a market analysis article. Tools change the page: \
                 title, reading mode, scrolling, the watchlist and its chart, highlights, \
                 annotations and snippets. Resources under desk:// show the current state."
                    .to_string(),
            ),
        }
    }

    fn list_tools(
        &self,
        request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let cursor = request.as_ref().and_then(|r| r.cursor.as_deref());
        let (tools, next_cursor) = self.tool_registry.list_tools(cursor);
        let result = ListToolsResult {
            tools,
            next_cursor,
            ..Default::default()
        };
        std::future::ready(Ok(result))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        let invocation = ToolInvocation::new(
            request.name.to_string(),
            request.arguments.unwrap_or_default(),
        );
        let registry = self.tool_registry.clone();

        async move {
            let ctx = ToolContext::new(Caller::Mcp);
            to_call_outcome(registry.dispatch(invocation, &ctx).await)
        }
    }

    fn list_resources(
        &self,
        request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let cursor = request.as_ref().and_then(|r| r.cursor.as_deref());
        std::future::ready(Ok(self.resources.list_resources(cursor)))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        let resources = self.resources.clone();
        let uri = request.uri.to_string();

        async move {
            resources
                .read_resource(&uri)
                .await
                .map_err(|e| e.to_mcp_error())
        }
    }
}

/// Map a dispatch outcome onto the MCP `tools/call` response.
///
/// Handler failures are shown to the caller as an error result; unknown
/// tools and bad arguments are protocol errors.
fn to_call_outcome(outcome: ToolOutcome<ToolResult>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(result) => Ok(result.into_call_tool_result()),
        Err(e @ ToolError::HandlerError(_)) => Ok(e.to_call_tool_result()),
        Err(e) => Err(e.to_mcp_error()),
    }
}

async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

/// Build the HTTP router: MCP at `/mcp` plus `/health`.
pub fn create_router(server: Arc<DeskServer>) -> Router {
    let service = StreamableHttpService::new(
        {
            let server = server.clone();
            move || Ok(server.as_ref().clone())
        },
        LocalSessionManager::default().into(),
        Default::default(),
    );

    Router::new()
        .route("/health", get(health_check))
        .nest_service("/mcp", service)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Start the desk as an MCP Streamable HTTP server.
///
/// This exposes the MCP endpoint at `/mcp` on the given bind address,
/// e.g. `127.0.0.1:3943` or `0.0.0.0:3943`.
pub async fn start_mcp_http(server: Arc<DeskServer>, bind: &str) -> Result<()> {
    let router = create_router(server);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("MCP HTTP server listening on http://{}/mcp", bind);
    axum::serve(listener, router).await?;
    Ok(())
}
