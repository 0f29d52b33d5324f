//! Error types for tool registration and dispatch.

use std::fmt;

use rmcp::model::{CallToolResult, Content};

/// Errors that can occur while registering or dispatching a tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolError {
    /// No tool is registered under this name.
    UnknownTool(String),

    /// The arguments do not satisfy the tool's input schema.
    InvalidArguments {
        /// Offending field.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The handler failed while executing.
    HandlerError(String),

    /// A tool with this name is already registered.
    DuplicateToolName(String),

    /// Tools must have a non-empty name.
    InvalidToolName(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "Unknown tool: {}", name),
            Self::InvalidArguments { field, reason } => {
                write!(f, "Invalid argument `{}`: {}", field, reason)
            }
            Self::HandlerError(msg) => write!(f, "Tool execution failed: {}", msg),
            Self::DuplicateToolName(name) => write!(f, "Tool already registered: {}", name),
            Self::InvalidToolName(name) => write!(f, "Invalid tool name: {:?}", name),
        }
    }
}

impl std::error::Error for ToolError {}

/// Result type for tool operations.
pub type ToolOutcome<T> = Result<T, ToolError>;

impl ToolError {
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::HandlerError(_) => "handler_error",
            Self::DuplicateToolName(_) => "duplicate_tool_name",
            Self::InvalidToolName(_) => "invalid_tool_name",
        }
    }

    /// Convert this error to an MCP ErrorData for protocol responses.
    ///
    /// Lookup and validation failures are invalid-params errors (-32602);
    /// everything else is an internal error (-32603).
    pub fn to_mcp_error(&self) -> rmcp::ErrorData {
        match self {
            Self::UnknownTool(_) | Self::InvalidArguments { .. } => {
                rmcp::ErrorData::invalid_params(self.to_string(), None)
            }
            Self::HandlerError(_) | Self::DuplicateToolName(_) | Self::InvalidToolName(_) => {
                rmcp::ErrorData::internal_error(self.to_string(), None)
            }
        }
    }

    /// Render this error as a tool-level error result the caller can display.
    pub fn to_call_tool_result(&self) -> CallToolResult {
        CallToolResult {
            content: vec![Content::text(self.to_string())],
            structured_content: None,
            is_error: Some(true),
            meta: None,
        }
    }
}
