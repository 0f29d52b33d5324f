//! Acknowledgement-only article actions: `subscribeToAuthor`,
//! `saveArticle` and `emailArticle`. They change nothing beyond the
//! notification log.

use std::future::Future;
use std::pin::Pin;

use crate::state::{DeskContext, NotificationKind};
use crate::tools::{InputSchema, ToolArguments, ToolContext, ToolHandler, ToolResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleAction {
    SubscribeToAuthor,
    Save,
    Email,
}

impl ArticleAction {
    fn notice(self) -> &'static str {
        match self {
            ArticleAction::SubscribeToAuthor => {
                "You have now been subscribed to the author of this article"
            }
            ArticleAction::Save => "This article has been added to your Read Later collection",
            ArticleAction::Email => "This article has been delivered to your inbox",
        }
    }

    fn reply(self) -> &'static str {
        match self {
            ArticleAction::SubscribeToAuthor => "Successfully subscribed to author.",
            ArticleAction::Save => "Article saved to Read Later collection.",
            ArticleAction::Email => "Article sent to email.",
        }
    }
}

pub struct AcknowledgeHandler {
    desk: DeskContext,
    action: ArticleAction,
}

impl AcknowledgeHandler {
    pub fn new(desk: DeskContext, action: ArticleAction) -> Self {
        Self { desk, action }
    }
}

impl ToolHandler for AcknowledgeHandler {
    fn name(&self) -> &str {
        match self.action {
            ArticleAction::SubscribeToAuthor => "subscribeToAuthor",
            ArticleAction::Save => "saveArticle",
            ArticleAction::Email => "emailArticle",
        }
    }

    fn description(&self) -> &str {
        match self.action {
            ArticleAction::SubscribeToAuthor => "Subscribe to the article author",
            ArticleAction::Save => "Save article to Read Later collection",
            ArticleAction::Email => "Email article to user",
        }
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty()
    }

    fn execute(
        &self,
        _args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            self.desk
                .lock()
                .await
                .notify(self.action.notice(), NotificationKind::Success);
            Ok(ToolResult::text(self.action.reply()))
        })
    }
}
