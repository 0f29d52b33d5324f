//! Read-only MCP resources exposing snapshots of the desk state.
//!
//! Every resource is a JSON document rendered from the current
//! `DeskState` at read time. URIs use the `desk://` scheme.

use rmcp::model::{
    AnnotateAble, ListResourcesResult, RawResource, ReadResourceResult, ResourceContents,
};
use serde_json::{Value, json};

use crate::state::{DeskContext, DeskState};

/// Default page size for paginated resource listings.
const DEFAULT_PAGE_SIZE: usize = 100;

/// Maximum URI length to prevent abuse.
const MAX_URI_LENGTH: usize = 4096;

const SCHEME: &str = "desk://";

/// Error types for resource operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceError {
    /// Resource URI not found.
    NotFound(String),
    /// Invalid URI (wrong scheme or fails validation).
    InvalidUri(String),
    /// Internal error while rendering a resource.
    Internal(String),
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceError::NotFound(uri) => write!(f, "Resource not found: {}", uri),
            ResourceError::InvalidUri(uri) => write!(f, "Invalid URI: {}", uri),
            ResourceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ResourceError {}

impl ResourceError {
    /// Convert to an MCP error: -32002 for unknown resources, -32602 for
    /// malformed URIs, -32603 otherwise.
    pub fn to_mcp_error(&self) -> rmcp::ErrorData {
        match self {
            ResourceError::NotFound(_) => rmcp::ErrorData::new(
                rmcp::model::ErrorCode(-32002),
                self.to_string(),
                None,
            ),
            ResourceError::InvalidUri(_) => rmcp::ErrorData::invalid_params(self.to_string(), None),
            ResourceError::Internal(_) => rmcp::ErrorData::internal_error(self.to_string(), None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeskResource {
    Display,
    Watchlist,
    Chart,
    TableOfContents,
    Annotations,
    Snippets,
    Notifications,
}

const ALL: &[DeskResource] = &[
    DeskResource::Display,
    DeskResource::Watchlist,
    DeskResource::Chart,
    DeskResource::TableOfContents,
    DeskResource::Annotations,
    DeskResource::Snippets,
    DeskResource::Notifications,
];

impl DeskResource {
    fn uri(self) -> &'static str {
        match self {
            DeskResource::Display => "desk://display",
            DeskResource::Watchlist => "desk://watchlist",
            DeskResource::Chart => "desk://chart",
            DeskResource::TableOfContents => "desk://article/toc",
            DeskResource::Annotations => "desk://annotations",
            DeskResource::Snippets => "desk://snippets",
            DeskResource::Notifications => "desk://notifications",
        }
    }

    fn name(self) -> &'static str {
        match self {
            DeskResource::Display => "display",
            DeskResource::Watchlist => "watchlist",
            DeskResource::Chart => "chart",
            DeskResource::TableOfContents => "article-toc",
            DeskResource::Annotations => "annotations",
            DeskResource::Snippets => "snippets",
            DeskResource::Notifications => "notifications",
        }
    }

    fn description(self) -> &'static str {
        match self {
            DeskResource::Display => "Page title, reading mode, scroll position and open dialogs",
            DeskResource::Watchlist => "Watched tickers with price, change and colour",
            DeskResource::Chart => "Chart label, line colour and series",
            DeskResource::TableOfContents => "Article sections with read status",
            DeskResource::Annotations => "Notes attached to article passages",
            DeskResource::Snippets => "Saved snippets, newest first",
            DeskResource::Notifications => "Recent notifications, oldest first",
        }
    }

    fn from_uri(uri: &str) -> Option<Self> {
        ALL.iter().copied().find(|r| r.uri() == uri)
    }

    fn render(self, state: &DeskState) -> Value {
        match self {
            DeskResource::Display => json!({
                "title": state.title,
                "displayMode": state.display_mode,
                "scroll": {
                    "offset": state.scroll.offset,
                    "viewportHeight": state.scroll.viewport_height,
                    "documentHeight": state.scroll.document_height,
                    "atTop": state.scroll.at_top(),
                    "atBottom": state.scroll.at_bottom(),
                },
                "visibleHeadings": state.visible_headings(),
                "highlights": state.article.highlights(),
                "recommendations": state.recommendations,
                "companyPreview": state.company_preview,
            }),
            DeskResource::Watchlist => json!(state.watchlist),
            DeskResource::Chart => json!(state.chart),
            DeskResource::TableOfContents => json!({
                "headline": crate::article::ARTICLE_HEADLINE,
                "dateline": crate::article::ARTICLE_DATELINE,
                "readCount": state.article.read_count(),
                "sections": state.article.table_of_contents(),
            }),
            DeskResource::Annotations => {
                json!(state.article.annotations().collect::<Vec<_>>())
            }
            DeskResource::Snippets => json!(state.article.snippets()),
            DeskResource::Notifications => json!(state.notifications),
        }
    }
}

/// Validate a resource URI. Returns true if the URI is safe.
fn is_valid_uri(uri: &str) -> bool {
    !uri.is_empty()
        && uri.len() <= MAX_URI_LENGTH
        && uri.starts_with(SCHEME)
        && !uri.contains("../")
        && !uri.contains('\0')
}

/// Serves the `desk://` resources for one desk session.
#[derive(Clone)]
pub struct DeskResources {
    desk: DeskContext,
}

impl DeskResources {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }

    /// List resources.
    ///
    /// Cursor format is simply the offset as a string (e.g., "0", "100").
    pub fn list_resources(&self, cursor: Option<&str>) -> ListResourcesResult {
        let offset = cursor.and_then(|c| c.parse::<usize>().ok()).unwrap_or(0);

        let page: Vec<_> = ALL
            .iter()
            .skip(offset)
            .take(DEFAULT_PAGE_SIZE)
            .map(|r| {
                RawResource {
                    uri: r.uri().to_string(),
                    name: r.name().to_string(),
                    title: None,
                    description: Some(r.description().to_string()),
                    mime_type: Some("application/json".to_string()),
                    size: None,
                    icons: None,
                    meta: None,
                }
                .no_annotation()
            })
            .collect();

        let next_offset = offset + page.len();
        let next_cursor = if next_offset < ALL.len() {
            Some(next_offset.to_string())
        } else {
            None
        };

        ListResourcesResult {
            meta: None,
            resources: page,
            next_cursor,
        }
    }

    /// Render the resource at `uri` from the current state.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if !is_valid_uri(uri) {
            return Err(ResourceError::InvalidUri(uri.to_string()));
        }
        let resource =
            DeskResource::from_uri(uri).ok_or_else(|| ResourceError::NotFound(uri.to_string()))?;

        let value = {
            let state = self.desk.lock().await;
            resource.render(&state)
        };
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| ResourceError::Internal(format!("Failed to render {}: {}", uri, e)))?;

        tracing::debug!(%uri, bytes = text.len(), "Resource read");
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}
