//! Tool registry and dispatcher.
//!
//! Provides a `ToolHandler` trait for implementing tools and a `ToolRegistry`
//! that registers them by unique name, validates arguments against each
//! tool's schema and normalizes every outcome into a `ToolResult` or a
//! `ToolError`.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use rmcp::model::{JsonObject, Tool as McpTool};
use uuid::Uuid;

use super::error::{ToolError, ToolOutcome};
use super::result::{ToolInvocation, ToolResult};
use super::schema::{InputSchema, ToolArguments};
use crate::types::ToolName;

/// Page size for `list_tools`.
const DEFAULT_PAGE_SIZE: usize = 100;

/// Where an invocation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Mcp,
    Cli,
}

impl Caller {
    pub fn as_str(self) -> &'static str {
        match self {
            Caller::Mcp => "mcp",
            Caller::Cli => "cli",
        }
    }
}

/// Context passed to tool handlers during execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub invocation_id: Uuid,
    pub caller: Caller,
}

impl ToolContext {
    pub fn new(caller: Caller) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            caller,
        }
    }
}

/// Trait for handling tool invocations.
///
/// Each tool implements this trait to define its schema and execution logic.
/// Handlers hold whatever shared state they mutate; `execute` only sees
/// arguments that already passed `input_schema`.
pub trait ToolHandler: Send + Sync {
    /// Returns the tool's name (e.g., "changeTitle").
    fn name(&self) -> &str;

    /// Returns the tool's human-readable title.
    fn title(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> &str;

    fn input_schema(&self) -> InputSchema;

    /// Executes the tool with validated arguments.
    fn execute(
        &self,
        args: ToolArguments,
        ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>>;

    /// Converts this handler to an `McpTool` for use in `list_tools`.
    fn to_mcp_tool(&self) -> McpTool {
        use std::borrow::Cow;

        McpTool {
            name: Cow::Owned(self.name().to_string()),
            title: self.title().map(|s| s.to_string()),
            description: Some(Cow::Owned(self.description().to_string())),
            input_schema: Arc::new(self.input_schema().to_json_object()),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: None,
        }
    }
}

/// Registry for managing tool handlers.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    handlers: BTreeMap<ToolName, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool handler.
    ///
    /// Fails if the name is empty or already taken.
    pub fn register(mut self, handler: Arc<dyn ToolHandler>) -> ToolOutcome<Self> {
        let name = ToolName::new(handler.name());
        if name.as_str().trim().is_empty() {
            return Err(ToolError::InvalidToolName(name.into_inner()));
        }
        if self.handlers.contains_key(name.as_str()) {
            return Err(ToolError::DuplicateToolName(name.into_inner()));
        }
        tracing::debug!(tool = %name, "Registered tool");
        self.handlers.insert(name, handler);
        Ok(self)
    }

    /// Register a tool handler from a type that implements `ToolHandler`.
    pub fn register_handler<T: ToolHandler + 'static>(self, handler: T) -> ToolOutcome<Self> {
        self.register(Arc::new(handler))
    }

    /// Get a tool handler by exact name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.handlers.get(name).cloned()
    }

    /// All registered tool names, sorted.
    pub fn list_names(&self) -> Vec<ToolName> {
        self.handlers.keys().cloned().collect()
    }

    /// One page of tools for `list_tools`, sorted by name.
    ///
    /// The cursor is the offset as a string ("0", "100", ...); an
    /// unparseable cursor starts from the beginning.
    pub fn list_tools(&self, cursor: Option<&str>) -> (Vec<McpTool>, Option<String>) {
        let offset = cursor.and_then(|c| c.parse::<usize>().ok()).unwrap_or(0);
        let total = self.handlers.len();

        let page: Vec<McpTool> = self
            .handlers
            .values()
            .skip(offset)
            .take(DEFAULT_PAGE_SIZE)
            .map(|handler| handler.to_mcp_tool())
            .collect();

        let next_offset = offset + page.len();
        let next_cursor = if next_offset < total {
            Some(next_offset.to_string())
        } else {
            None
        };
        (page, next_cursor)
    }

    /// Validate and execute one invocation.
    ///
    /// Lookup is by exact, case-sensitive name. The handler runs to
    /// completion before this returns; its failures come back as
    /// `HandlerError` carrying the original message.
    pub async fn dispatch(
        &self,
        invocation: ToolInvocation,
        ctx: &ToolContext,
    ) -> ToolOutcome<ToolResult> {
        let started = Instant::now();
        let outcome = self.dispatch_inner(&invocation.name, &invocation.arguments, ctx).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(_) => tracing::info!(
                tool = %invocation.name,
                invocation_id = %ctx.invocation_id,
                caller = ctx.caller.as_str(),
                elapsed_ms,
                "Tool call succeeded"
            ),
            Err(e) => tracing::warn!(
                tool = %invocation.name,
                invocation_id = %ctx.invocation_id,
                caller = ctx.caller.as_str(),
                error_kind = e.kind(),
                error = %e,
                elapsed_ms,
                "Tool call failed"
            ),
        }
        outcome
    }

    async fn dispatch_inner(
        &self,
        name: &str,
        arguments: &JsonObject,
        ctx: &ToolContext,
    ) -> ToolOutcome<ToolResult> {
        let handler = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let args = handler.input_schema().validate(arguments)?;

        let result = handler
            .execute(args, ctx)
            .await
            .map_err(|e| ToolError::HandlerError(e.to_string()))?;

        if result.is_empty() {
            return Err(ToolError::HandlerError(format!(
                "{} produced no content",
                name
            )));
        }
        Ok(result)
    }

    /// Check if a tool with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Return the number of registered tools.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Return `true` if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
