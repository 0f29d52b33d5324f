//! Handlers for `addToWatchlist`, `removeFromWatchlist` and `clearWatchlist`.
//!
//! Every mutation re-points the chart label afterwards so it never names a
//! symbol that is no longer watched.

use std::future::Future;
use std::pin::Pin;

use crate::companies::{Rating, Trend};
use crate::state::{DeskContext, NotificationKind, TrendColor, WatchlistEntry};
use crate::tools::{InputSchema, ToolArguments, ToolContext, ToolHandler, ToolResult};
use crate::types::Ticker;

pub struct AddToWatchlistHandler {
    desk: DeskContext,
}

impl AddToWatchlistHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for AddToWatchlistHandler {
    fn name(&self) -> &str {
        "addToWatchlist"
    }

    fn description(&self) -> &str {
        "Add a new stock ticker to the watchlist"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty().string("ticker", "Stock ticker to add")
    }

    fn execute(
        &self,
        args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let ticker = args.str("ticker")?;
            let (rating, trend) = match self.desk.directory().find(ticker) {
                Some(company) => (company.rating, company.trend()),
                None => (Rating::Neutral, Trend::Neutral),
            };

            let mut guard = self.desk.lock().await;
            let state = &mut *guard;
            let price = state.generator.price();
            let change = state.generator.change();

            let series = state.generator.ticker_series(price, rating);
            state.chart.replace_series(series);
            state.chart.stroke = trend.stroke().to_string();
            state.chart.label = ticker.to_string();

            let replaced = state.watchlist.upsert(WatchlistEntry {
                symbol: Ticker::new(ticker),
                price,
                change,
                color: TrendColor::for_change(change),
            });
            state.chart.sync_label(&state.watchlist);
            tracing::debug!(%ticker, price, change, replaced, "Watchlist upsert");

            state.notify(
                format!("Added {} to watchlist and updated chart", ticker),
                NotificationKind::Success,
            );
            Ok(ToolResult::text(format!(
                "Added {} to watchlist and updated chart display.",
                ticker
            )))
        })
    }
}

pub struct RemoveFromWatchlistHandler {
    desk: DeskContext,
}

impl RemoveFromWatchlistHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for RemoveFromWatchlistHandler {
    fn name(&self) -> &str {
        "removeFromWatchlist"
    }

    fn description(&self) -> &str {
        "Remove a stock ticker from the watchlist"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty().string("ticker", "Stock ticker to remove")
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
            let removed = state.watchlist.remove(ticker);
            state.chart.sync_label(&state.watchlist);
            tracing::debug!(%ticker, removed, "Watchlist remove");
            Ok(ToolResult::text(format!("Removed {} from watchlist.", ticker)))
        })
    }
}

pub struct ClearWatchlistHandler {
    desk: DeskContext,
}

impl ClearWatchlistHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

impl ToolHandler for ClearWatchlistHandler {
    fn name(&self) -> &str {
        "clearWatchlist"
    }

    fn description(&self) -> &str {
        "Remove all stock tickers from the watchlist"
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
            let mut guard = self.desk.lock().await;
            let state = &mut *guard;
            let dropped = state.watchlist.clear();
            state.chart.sync_label(&state.watchlist);
            tracing::debug!(dropped, "Watchlist cleared");
            Ok(ToolResult::text("Successfully cleared watchlist."))
        })
    }
}
