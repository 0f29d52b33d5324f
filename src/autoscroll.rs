//! Background auto-scroll.
//!
//! `autoScroll` spawns a task that nudges the scroll position every tick
//! until it reaches the top or bottom of the page or is cancelled. At most
//! one task runs at a time; starting a new one replaces the old one, and
//! stopping when nothing runs is a no-op.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::state::{DeskState, ScrollDirection, ScrollSpeed};

struct AutoScrollTask {
    handle: JoinHandle<()>,
    direction: ScrollDirection,
    speed: ScrollSpeed,
}

impl AutoScrollTask {
    fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

pub struct AutoScroller {
    tick: Duration,
    current: Mutex<Option<AutoScrollTask>>,
}

impl AutoScroller {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            current: Mutex::new(None),
        }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Start scrolling `state` in `direction` at `speed`.
    ///
    /// Returns true if a running auto-scroll was replaced.
    pub async fn start(
        &self,
        state: Arc<Mutex<DeskState>>,
        direction: ScrollDirection,
        speed: ScrollSpeed,
    ) -> bool {
        let mut current = self.current.lock().await;
        let replaced = match current.take() {
            Some(previous) if previous.is_running() => {
                previous.handle.abort();
                true
            }
            _ => false,
        };

        let tick = self.tick;
        let step = speed.step();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            // The first tick fires immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let at_bound = state.lock().await.scroll_by(direction, step);
                if at_bound {
                    tracing::debug!(direction = direction.as_str(), "Auto-scroll reached page bound");
                    break;
                }
            }
        });

        tracing::info!(
            direction = direction.as_str(),
            speed = speed.as_str(),
            replaced,
            "Auto-scroll started"
        );
        *current = Some(AutoScrollTask {
            handle,
            direction,
            speed,
        });
        replaced
    }

    /// Cancel the running auto-scroll. Returns false when none was running.
    pub async fn stop(&self) -> bool {
        let mut current = self.current.lock().await;
        match current.take() {
            Some(task) if task.is_running() => {
                task.handle.abort();
                tracing::info!("Auto-scroll stopped");
                true
            }
            _ => false,
        }
    }

    /// Direction and speed of the running auto-scroll, if any.
    pub async fn status(&self) -> Option<(ScrollDirection, ScrollSpeed)> {
        let current = self.current.lock().await;
        current
            .as_ref()
            .filter(|task| task.is_running())
            .map(|task| (task.direction, task.speed))
    }
}

impl Drop for AutoScroller {
    fn drop(&mut self) {
        if let Some(task) = self.current.get_mut().take() {
            task.handle.abort();
        }
    }
}
