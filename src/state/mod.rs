//! Shared application state mutated by tool handlers.
//!
//! `DeskState` is the whole page session: title, display mode, watchlist,
//! chart, scroll position, the article and its reading aids, and the last
//! few notifications. `DeskContext` is the cheap, cloneable handle that every
//! tool handler holds; all mutation goes through its lock, so handler
//! executions never interleave on the same state.

mod chart;
mod scroll;
mod watchlist;

pub use chart::{ChartPoint, ChartState};
pub use scroll::{ScrollDirection, ScrollSpeed, ScrollState};
pub use watchlist::{TrendColor, Watchlist, WatchlistEntry};

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::article::Article;
use crate::autoscroll::AutoScroller;
use crate::companies::{Company, CompanyDirectory};
use crate::config::DeskConfig;
use crate::generate::MarketDataGenerator;
use crate::types::SectionId;

/// Notifications kept for display.
pub const NOTIFICATION_LIMIT: usize = 20;

/// Watchlist rows seeded from the company directory.
pub const INITIAL_WATCHLIST_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Day,
    Night,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Day => DisplayMode::Night,
            DisplayMode::Night => DisplayMode::Day,
        }
    }

    pub fn is_night(self) -> bool {
        self == DisplayMode::Night
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedArticle {
    pub title: String,
    pub date: String,
    pub authors: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub articles: Vec<RecommendedArticle>,
    pub search_context: String,
}

/// Company profile currently open, with the article sentences naming it.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyPreview {
    pub company: Company,
    pub sentences: Vec<String>,
}

pub struct DeskState {
    pub title: String,
    pub display_mode: DisplayMode,
    pub watchlist: Watchlist,
    pub chart: ChartState,
    pub scroll: ScrollState,
    pub article: Article,
    pub notifications: VecDeque<Notification>,
    pub recommendations: Option<Recommendations>,
    pub company_preview: Option<CompanyPreview>,
    pub generator: MarketDataGenerator,
}

impl DeskState {
    pub fn new(config: &DeskConfig, directory: &CompanyDirectory) -> Self {
        let mut generator = MarketDataGenerator::new(config.seed);
        let watchlist = Watchlist::seeded(directory, INITIAL_WATCHLIST_SIZE, &mut generator);

        let (label, stroke) = match watchlist.first() {
            Some(first) => {
                let trend = directory
                    .find(first.symbol.as_str())
                    .map(Company::trend)
                    .unwrap_or(crate::companies::Trend::Neutral);
                (first.symbol.to_string(), trend.stroke())
            }
            None => (String::new(), crate::companies::Trend::Neutral.stroke()),
        };

        let article = Article::builtin();
        let scroll = ScrollState::new(config.viewport_height, article.document_height());

        let mut state = Self {
            title: config.title.clone(),
            display_mode: if config.night_mode {
                DisplayMode::Night
            } else {
                DisplayMode::Day
            },
            watchlist,
            chart: ChartState::initial(label, stroke),
            scroll,
            article,
            notifications: VecDeque::new(),
            recommendations: None,
            company_preview: None,
            generator,
        };
        state.mark_visible_read();
        state
    }

    /// Record a notification, dropping the oldest beyond the limit.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        tracing::debug!(?kind, %message, "Notification");
        self.notifications.push_back(Notification {
            message,
            kind,
            at: Utc::now(),
        });
        while self.notifications.len() > NOTIFICATION_LIMIT {
            self.notifications.pop_front();
        }
    }

    /// Move the page and update read tracking.
    ///
    /// Returns true when the move ended on the bound it was heading for.
    pub fn scroll_by(&mut self, direction: ScrollDirection, amount: f64) -> bool {
        let at_bound = self.scroll.advance(direction, amount);
        self.mark_visible_read();
        at_bound
    }

    pub fn scroll_page(&mut self, direction: ScrollDirection) -> bool {
        let at_bound = self.scroll.page(direction);
        self.mark_visible_read();
        at_bound
    }

    fn mark_visible_read(&mut self) -> Vec<SectionId> {
        let newly_read = self
            .article
            .mark_visible_read(self.scroll.offset, self.scroll.viewport_height);
        for id in &newly_read {
            tracing::debug!(section = %id, "Section read");
        }
        newly_read
    }

    /// Headings of the sections currently on screen.
    pub fn visible_headings(&self) -> Vec<String> {
        self.article
            .visible_headings(self.scroll.offset, self.scroll.viewport_height)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Shared handle to the desk session.
#[derive(Clone)]
pub struct DeskContext {
    state: Arc<Mutex<DeskState>>,
    directory: Arc<CompanyDirectory>,
    auto_scroller: Arc<AutoScroller>,
    config: Arc<DeskConfig>,
}

impl DeskContext {
    pub fn new(config: DeskConfig) -> Self {
        Self::with_directory(config, CompanyDirectory::builtin())
    }

    pub fn with_directory(config: DeskConfig, directory: CompanyDirectory) -> Self {
        let state = DeskState::new(&config, &directory);
        let tick = Duration::from_millis(config.auto_scroll_interval_ms);
        Self {
            state: Arc::new(Mutex::new(state)),
            directory: Arc::new(directory),
            auto_scroller: Arc::new(AutoScroller::new(tick)),
            config: Arc::new(config),
        }
    }

    /// Lock the session state for reading or mutation.
    pub async fn lock(&self) -> MutexGuard<'_, DeskState> {
        self.state.lock().await
    }

    pub fn state(&self) -> &Arc<Mutex<DeskState>> {
        &self.state
    }

    pub fn directory(&self) -> &CompanyDirectory {
        &self.directory
    }

    pub fn auto_scroller(&self) -> &AutoScroller {
        &self.auto_scroller
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }
}
