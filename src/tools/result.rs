//! The invocation and result envelopes exchanged with the transport.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::{Deserialize, Serialize};

/// One incoming tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub name: String,
    #[serde(default)]
    pub arguments: JsonObject,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, arguments: JsonObject) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// A call with no arguments.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, JsonObject::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Successful outcome of a tool: an ordered list of text entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
        }
    }

    /// Text of the first entry, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .map(|c| match c {
                ToolContent::Text { text } => text.as_str(),
            })
            .next()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_call_tool_result(self) -> CallToolResult {
        let content = self
            .content
            .into_iter()
            .map(|c| match c {
                ToolContent::Text { text } => Content::text(text),
            })
            .collect();
        CallToolResult {
            content,
            structured_content: None,
            is_error: Some(false),
            meta: None,
        }
    }
}
