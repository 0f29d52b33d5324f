use serde::Serialize;

use crate::companies::{CompanyDirectory, Rating};
use crate::generate::MarketDataGenerator;
use crate::types::Ticker;

/// Colour of a watchlist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendColor {
    Green,
    Red,
    Amber,
}

impl TrendColor {
    pub fn for_change(change: f64) -> Self {
        if change >= 0.0 { TrendColor::Green } else { TrendColor::Red }
    }

    pub fn for_rating(rating: Rating) -> Self {
        match rating {
            Rating::Overweight => TrendColor::Green,
            Rating::Underweight => TrendColor::Red,
            Rating::Neutral => TrendColor::Amber,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchlistEntry {
    pub symbol: Ticker,
    pub price: f64,
    pub change: f64,
    pub color: TrendColor,
}

/// Ordered list of watched symbols, at most one entry per symbol.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the first `count` directory companies.
    ///
    /// Symbols are the upper-cased names and prices the numeric target
    /// prices. Overweight names show +10, Underweight -10 and Neutral a
    /// random small move.
    pub fn seeded(directory: &CompanyDirectory, count: usize, generator: &mut MarketDataGenerator) -> Self {
        let entries = directory
            .iter()
            .take(count)
            .map(|company| {
                let change = match company.rating {
                    Rating::Overweight => 10.0,
                    Rating::Underweight => -10.0,
                    Rating::Neutral => generator.change(),
                };
                WatchlistEntry {
                    symbol: Ticker::new(company.name.to_uppercase()),
                    price: company.target_price_value(),
                    change,
                    color: TrendColor::for_rating(company.rating),
                }
            })
            .collect();
        Self { entries }
    }

    /// Insert `entry`, replacing any entry with the same symbol.
    ///
    /// The entry is placed last. Returns true when an existing entry was
    /// replaced.
    pub fn upsert(&mut self, entry: WatchlistEntry) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.symbol != entry.symbol);
        let replaced = self.entries.len() != before;
        self.entries.push(entry);
        replaced
    }

    /// Remove the entry for `symbol`. Returns false when there was none.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.symbol.as_str() != symbol);
        self.entries.len() != before
    }

    /// Remove everything, returning how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn get(&self, symbol: &str) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|e| e.symbol.as_str() == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn first(&self) -> Option<&WatchlistEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
