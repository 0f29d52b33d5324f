//! Handlers for the reading-mode tools: `toggleDayNightMode`,
//! `setNightMode` and `setDayMode`.

use std::future::Future;
use std::pin::Pin;

use crate::state::{DeskContext, DisplayMode};
use crate::tools::{InputSchema, ToolArguments, ToolContext, ToolHandler, ToolResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayChange {
    Toggle,
    Night,
    Day,
}

/// One handler per `DisplayChange`.
pub struct DisplayModeHandler {
    desk: DeskContext,
    change: DisplayChange,
}

impl DisplayModeHandler {
    pub fn new(desk: DeskContext, change: DisplayChange) -> Self {
        Self { desk, change }
    }
}

impl ToolHandler for DisplayModeHandler {
    fn name(&self) -> &str {
        match self.change {
            DisplayChange::Toggle => "toggleDayNightMode",
            DisplayChange::Night => "setNightMode",
            DisplayChange::Day => "setDayMode",
        }
    }

    fn description(&self) -> &str {
        match self.change {
            DisplayChange::Toggle => {
                "Toggle day/night reading mode for comfortable reading and visual impairment"
            }
            DisplayChange::Night => {
                "Set night dark reading mode for comfortable reading and visual impairment"
            }
            DisplayChange::Day => {
                "Set day light reading mode for comfortable reading and visual impairment"
            }
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
            let mut state = self.desk.lock().await;
            let (mode, reply) = match self.change {
                DisplayChange::Toggle => (
                    state.display_mode.toggled(),
                    "Day/Night mode toggled for comfortable reading.",
                ),
                DisplayChange::Night => {
                    (DisplayMode::Night, "Night mode toggled for comfortable reading.")
                }
                DisplayChange::Day => {
                    (DisplayMode::Day, "Day mode toggled for comfortable reading.")
                }
            };
            state.display_mode = mode;
            tracing::debug!(?mode, "Display mode set");
            Ok(ToolResult::text(reply))
        })
    }
}
