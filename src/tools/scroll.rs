//! Handlers for `scrollPage`, `autoScroll` and `stopAutoScroll`.

use std::future::Future;
use std::pin::Pin;

use anyhow::anyhow;

use crate::state::{DeskContext, ScrollDirection, ScrollSpeed};
use crate::tools::{InputSchema, ToolArguments, ToolContext, ToolHandler, ToolResult};

const DIRECTIONS: &[&str] = &["up", "down"];
const SPEEDS: &[&str] = &["slow", "normal", "fast"];

fn direction(args: &ToolArguments) -> anyhow::Result<ScrollDirection> {
    let raw = args.str("direction")?;
    ScrollDirection::parse(raw).ok_or_else(|| anyhow!("unsupported direction: {}", raw))
}

pub struct ScrollPageHandler {
    desk: DeskContext,
}

impl ScrollPageHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for ScrollPageHandler {
    fn name(&self) -> &str {
        "scrollPage"
    }

    fn description(&self) -> &str {
        "Scroll the page up or down by one viewport height"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty().one_of("direction", "Scroll direction", DIRECTIONS)
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let direction = direction(&args)?;
            let mut state = self.desk.lock().await;
            state.scroll_page(direction);
            tracing::debug!(offset = state.scroll.offset, "Scrolled one page");
            Ok(ToolResult::text(format!(
                "Scrolled {} by one page.",
                direction.as_str()
            )))
        })
    }
}

pub struct AutoScrollHandler {
    desk: DeskContext,
}

impl AutoScrollHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for AutoScrollHandler {
    fn name(&self) -> &str {
        "autoScroll"
    }

    fn description(&self) -> &str {
        "Automatically scroll the page up or down at a specified speed (slow, normal, fast)"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty()
            .one_of("direction", "Scroll direction", DIRECTIONS)
            .one_of("speed", "Scroll speed", SPEEDS)
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let direction = direction(&args)?;
            let raw_speed = args.str("speed")?;
            let speed = ScrollSpeed::parse(raw_speed)
                .ok_or_else(|| anyhow!("unsupported speed: {}", raw_speed))?;

            self.desk
                .auto_scroller()
                .start(self.desk.state().clone(), direction, speed)
                .await;

            Ok(ToolResult::text(format!(
                "Auto-scroll started ({}, {}). Call stopAutoScroll to stop.",
                direction.as_str(),
                speed.as_str()
            )))
        })
    }
}

pub struct StopAutoScrollHandler {
    desk: DeskContext,
}

impl StopAutoScrollHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for StopAutoScrollHandler {
    fn name(&self) -> &str {
        "stopAutoScroll"
    }

    fn description(&self) -> &str {
        "Stop any ongoing auto-scroll on the page"
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
            let reply = if self.desk.auto_scroller().stop().await {
                "Auto-scroll stopped."
            } else {
                "No auto-scroll in progress."
            };
            Ok(ToolResult::text(reply))
        })
    }
}
