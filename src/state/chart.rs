use serde::Serialize;

use super::Watchlist;
use crate::generate::MarketDataGenerator;

/// One point on the price chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The chart shown beside the article: a label, a line colour and a series.
#[derive(Debug, Clone, Serialize)]
pub struct ChartState {
    pub label: String,
    pub stroke: String,
    pub series: Vec<ChartPoint>,
}

impl ChartState {
    /// The index series shown before any ticker is selected.
    pub fn initial(label: impl Into<String>, stroke: impl Into<String>) -> Self {
        let series = [5458.0, 5462.0, 5470.0, 5460.0, 5468.0]
            .into_iter()
            .zip(19..)
            .map(|(value, hour)| ChartPoint {
                time: format!("{}:00", hour),
                value,
                color: None,
            })
            .collect();
        Self {
            label: label.into(),
            stroke: stroke.into(),
            series,
        }
    }

    /// Keep the time axis and draw fresh values for every point.
    pub fn regenerate_values(&mut self, generator: &mut MarketDataGenerator) {
        for point in &mut self.series {
            point.value = generator.chart_value();
        }
    }

    pub fn replace_series(&mut self, series: Vec<ChartPoint>) {
        self.series = series;
    }

    /// Re-point the label after the watchlist changed.
    ///
    /// An empty watchlist blanks the label; a label that no longer names a
    /// watchlist entry falls back to the first entry.
    pub fn sync_label(&mut self, watchlist: &Watchlist) {
        match watchlist.first() {
            None => self.label.clear(),
            Some(first) if !watchlist.contains(&self.label) => {
                self.label = first.symbol.to_string();
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{TrendColor, WatchlistEntry};
    use crate::types::Ticker;

    fn watchlist(symbols: &[&str]) -> Watchlist {
        let mut list = Watchlist::new();
        for s in symbols {
            list.upsert(WatchlistEntry {
                symbol: Ticker::new(*s),
                price: 1.0,
                change: 0.0,
                color: TrendColor::Amber,
            });
        }
        list
    }

    #[test]
    fn test_initial_series() {
        let chart = ChartState::initial("OPENAI", "#22c55e");
        assert_eq!(chart.series.len(), 5);
        assert_eq!(chart.series[0].time, "19:00");
        assert_eq!(chart.series[4].time, "23:00");
        assert_eq!(chart.series[2].value, 5470.0);
    }

    #[test]
    fn test_regenerate_keeps_time_axis() {
        let mut chart = ChartState::initial("X", "#000000");
        let times: Vec<_> = chart.series.iter().map(|p| p.time.clone()).collect();
        let mut g = MarketDataGenerator::new(Some(4));
        chart.regenerate_values(&mut g);
        let after: Vec<_> = chart.series.iter().map(|p| p.time.clone()).collect();
        assert_eq!(times, after);
    }

    #[test]
    fn test_sync_label() {
        let mut chart = ChartState::initial("GONE", "#000000");
        chart.sync_label(&watchlist(&["A", "B"]));
        assert_eq!(chart.label, "A");

        chart.label = "B".to_string();
        chart.sync_label(&watchlist(&["A", "B"]));
        assert_eq!(chart.label, "B");

        chart.sync_label(&Watchlist::new());
        assert_eq!(chart.label, "");
    }
}
