//! Reading-aid handlers: highlights, annotations and snippets.

use std::future::Future;
use std::pin::Pin;

use crate::state::{DeskContext, NotificationKind};
use crate::tools::{InputSchema, ToolArguments, ToolContext, ToolHandler, ToolResult};

pub struct HighlightHandler {
    desk: DeskContext,
}

impl HighlightHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for HighlightHandler {
    fn name(&self) -> &str {
        "highlightArticleContent"
    }

    fn description(&self) -> &str {
        "Highlight terms and surrounding context in the article content"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty().string("term", "Term to highlight")
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let term = args.str("term")?;
            let mut guard = self.desk.lock().await;
            let state = &mut *guard;
            let generator = &mut state.generator;
            let matched = state
                .article
                .highlight(term, || generator.highlight_color().to_string());
            tracing::debug!(%term, matched, "Highlighted term");
            Ok(ToolResult::text(format!("Highlighted \"{}\" in the article", term)))
        })
    }
}

pub struct AnnotateTextHandler {
    desk: DeskContext,
}

impl AnnotateTextHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for AnnotateTextHandler {
    fn name(&self) -> &str {
        "annotateText"
    }

    fn description(&self) -> &str {
        "Attach a note to a passage of the article"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty()
            .string("text", "Exact passage of the article to annotate")
            .string("note", "Note to attach")
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let passage = args.str("text")?;
            let note = args.str("note")?;
            let author = &self.desk.config().user;

            let mut state = self.desk.lock().await;
            let id = state.article.annotate(passage, note, author)?;
            state.notify("Annotation added", NotificationKind::Success);
            Ok(ToolResult::text(format!("Annotation {} added.", id)))
        })
    }
}

pub struct UpdateAnnotationHandler {
    desk: DeskContext,
}

impl UpdateAnnotationHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for UpdateAnnotationHandler {
    fn name(&self) -> &str {
        "updateAnnotation"
    }

    fn description(&self) -> &str {
        "Replace the note of an existing annotation"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty()
            .string("id", "Annotation id returned by annotateText")
            .string("note", "New note")
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let id = args.str("id")?;
            let note = args.str("note")?;
            let author = &self.desk.config().user;

            let mut state = self.desk.lock().await;
            state.article.update_annotation(id, note, author)?;
            state.notify("Annotation updated", NotificationKind::Success);
            Ok(ToolResult::text(format!("Annotation {} updated.", id)))
        })
    }
}

pub struct RemoveAnnotationHandler {
    desk: DeskContext,
}

impl RemoveAnnotationHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for RemoveAnnotationHandler {
    fn name(&self) -> &str {
        "removeAnnotation"
    }

    fn description(&self) -> &str {
        "Delete an annotation from the article"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty().string("id", "Annotation id returned by annotateText")
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let id = args.str("id")?;
            let mut state = self.desk.lock().await;
            let removed = state.article.remove_annotation(id)?;
            tracing::debug!(
                annotation = %removed.id,
                section = %removed.section_id,
                "Annotation removed"
            );
            state.notify("Annotation removed", NotificationKind::Info);
            Ok(ToolResult::text(format!("Annotation {} removed.", id)))
        })
    }
}

pub struct SaveSnippetHandler {
    desk: DeskContext,
}

impl SaveSnippetHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for SaveSnippetHandler {
    fn name(&self) -> &str {
        "saveSnippet"
    }

    fn description(&self) -> &str {
        "Save a passage of the article as a snippet"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty().string("text", "Text to save")
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let text = args.str("text")?;
            let author = &self.desk.config().user;

            let mut state = self.desk.lock().await;
            let summary = state.article.save_snippet(text, author)?.summary.clone();
            tracing::debug!(%summary, "Snippet saved");
            state.notify("Snippet saved", NotificationKind::Success);
            Ok(ToolResult::text("Snippet saved."))
        })
    }
}
