//! Handlers for `updateGraphForTicker` and `changeTitle`.

use std::future::Future;
use std::pin::Pin;

use crate::state::{DeskContext, NotificationKind};
use crate::tools::{InputSchema, ToolArguments, ToolContext, ToolHandler, ToolResult};

/// Redraws the chart with random values and a random line colour.
pub struct UpdateGraphHandler {
    desk: DeskContext,
}

impl UpdateGraphHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for UpdateGraphHandler {
    fn name(&self) -> &str {
        "updateGraphForTicker"
    }

    fn description(&self) -> &str {
        "Update the graph data and stroke color for a ticker"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty().string("ticker", "Stock ticker to chart")
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let ticker = args.str("ticker")?;

            let mut guard = self.desk.lock().await;
            let state = &mut *guard;
            state.chart.regenerate_values(&mut state.generator);
            let color = state.generator.color();
            state.chart.stroke = color.clone();
            state.chart.label = ticker.to_string();

            Ok(ToolResult::text(format!(
                "Graph updated for {} with color {}.",
                ticker, color
            )))
        })
    }
}

pub struct ChangeTitleHandler {
    desk: DeskContext,
}

impl ChangeTitleHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for ChangeTitleHandler {
    fn name(&self) -> &str {
        "changeTitle"
    }

    fn description(&self) -> &str {
        "Change the title of the page"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty().string("title", "New page title")
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let title = args.str("title")?;
            let mut state = self.desk.lock().await;
            state.title = title.to_string();
            state.notify("Title has been updated successfully", NotificationKind::Success);
            Ok(ToolResult::text("Title has been updated."))
        })
    }
}
