//! Tool registry and the desk's tool handlers.
//!
//! Each tool is a `ToolHandler` holding a clone of the shared `DeskContext`.
//! `default_registry` registers the full catalog; the MCP server and the CLI
//! both dispatch through it.

mod error;
mod registry;
mod result;
mod schema;

pub use error::{ToolError, ToolOutcome};
pub use registry::{Caller, ToolContext, ToolHandler, ToolRegistry};
pub use result::{ToolContent, ToolInvocation, ToolResult};
pub use schema::{FieldKind, InputSchema, SchemaField, ToolArguments};

// Tool handler implementations
mod chart;
mod company;
mod display;
mod notices;
mod recommendations;
mod reading;
mod scroll;
mod watchlist;

pub use chart::{ChangeTitleHandler, UpdateGraphHandler};
pub use company::ShowCompanyHandler;
pub use display::{DisplayChange, DisplayModeHandler};
pub use notices::{AcknowledgeHandler, ArticleAction};
pub use recommendations::RecommendedArticlesHandler;
pub use reading::{
    AnnotateTextHandler, HighlightHandler, RemoveAnnotationHandler, SaveSnippetHandler,
    UpdateAnnotationHandler,
};
pub use scroll::{AutoScrollHandler, ScrollPageHandler, StopAutoScrollHandler};
pub use watchlist::{AddToWatchlistHandler, ClearWatchlistHandler, RemoveFromWatchlistHandler};

#[cfg(test)]
mod integration_tests;

use crate::state::DeskContext;

/// Registry with every desk tool bound to `desk`.
pub fn default_registry(desk: &DeskContext) -> ToolOutcome<ToolRegistry> {
    ToolRegistry::new()
        .register_handler(DisplayModeHandler::new(desk.clone(), DisplayChange::Toggle))?
        .register_handler(DisplayModeHandler::new(desk.clone(), DisplayChange::Night))?
        .register_handler(DisplayModeHandler::new(desk.clone(), DisplayChange::Day))?
        .register_handler(UpdateGraphHandler::new(desk.clone()))?
        .register_handler(ChangeTitleHandler::new(desk.clone()))?
        .register_handler(ScrollPageHandler::new(desk.clone()))?
        .register_handler(AutoScrollHandler::new(desk.clone()))?
        .register_handler(StopAutoScrollHandler::new(desk.clone()))?
        .register_handler(AddToWatchlistHandler::new(desk.clone()))?
        .register_handler(RemoveFromWatchlistHandler::new(desk.clone()))?
        .register_handler(ClearWatchlistHandler::new(desk.clone()))?
        .register_handler(AcknowledgeHandler::new(desk.clone(), ArticleAction::SubscribeToAuthor))?
        .register_handler(AcknowledgeHandler::new(desk.clone(), ArticleAction::Save))?
        .register_handler(AcknowledgeHandler::new(desk.clone(), ArticleAction::Email))?
        .register_handler(RecommendedArticlesHandler::new(desk.clone()))?
        .register_handler(ShowCompanyHandler::new(desk.clone()))?
        .register_handler(HighlightHandler::new(desk.clone()))?
        .register_handler(AnnotateTextHandler::new(desk.clone()))?
        .register_handler(UpdateAnnotationHandler::new(desk.clone()))?
        .register_handler(RemoveAnnotationHandler::new(desk.clone()))?
        .register_handler(SaveSnippetHandler::new(desk.clone()))
}
