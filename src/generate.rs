//! Market-data generation.
//!
//! Prices, chart series, colours and synthetic ratings on the desk are
//! presentation values. Only their shape matters, so they come from a single
//! seedable RNG; a fixed seed makes a whole session reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::companies::{Rating, Trend};
use crate::state::ChartPoint;

/// Hours shown on the chart's x axis.
pub const CHART_HOURS: std::ops::RangeInclusive<u32> = 19..=23;

/// Tailwind classes applied to highlighted sentences.
pub const HIGHLIGHT_COLORS: [&str; 10] = [
    "bg-blue-600",
    "bg-green-600",
    "bg-purple-600",
    "bg-red-600",
    "bg-yellow-600",
    "bg-pink-600",
    "bg-indigo-600",
    "bg-orange-600",
    "bg-teal-600",
    "bg-cyan-600",
];

pub struct MarketDataGenerator {
    rng: StdRng,
}

impl MarketDataGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// A quote between 0.01 and 999.99, two decimals.
    pub fn price(&mut self) -> f64 {
        self.rng.gen_range(1..100_000) as f64 / 100.0
    }

    /// A daily change between -2.00 and +2.00, two decimals.
    pub fn change(&mut self) -> f64 {
        round2(self.rng.gen_range(-2.0..=2.0))
    }

    /// A whole-number chart value in `0..=10000`.
    pub fn chart_value(&mut self) -> f64 {
        self.rng.gen_range(0..=10_000) as f64
    }

    /// A random `#rrggbb` colour.
    pub fn color(&mut self) -> String {
        format!("#{:06x}", self.rng.gen_range(0..=0xFF_FFFFu32))
    }

    pub fn rating(&mut self) -> Rating {
        *[Rating::Overweight, Rating::Neutral, Rating::Underweight]
            .choose(&mut self.rng)
            .unwrap_or(&Rating::Neutral)
    }

    /// A target price string such as `"$412"`.
    pub fn target_price(&mut self) -> String {
        format!("${}", self.rng.gen_range(100..1000))
    }

    /// A partnership value such as `"$42mn"`.
    pub fn partnership_value(&mut self) -> String {
        format!("${}mn", self.rng.gen_range(10..100))
    }

    pub fn highlight_color(&mut self) -> &'static str {
        HIGHLIGHT_COLORS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(HIGHLIGHT_COLORS[0])
    }

    /// Hourly series walking away from `base`.
    ///
    /// Each step moves up to 1% of the base price. Overweight names drift
    /// upward and always close above the base, and their points carry the
    /// "up" colour.
    pub fn ticker_series(&mut self, base: f64, rating: Rating) -> Vec<ChartPoint> {
        let overweight = rating == Rating::Overweight;
        let last_hour = *CHART_HOURS.end();
        let mut current = base;
        let mut series = Vec::with_capacity(CHART_HOURS.clone().count());

        for hour in CHART_HOURS {
            let r: f64 = self.rng.r#gen();
            let step = if overweight && hour == last_hour {
                (r * 0.03 * base).abs() + 0.01 * base
            } else if overweight {
                (r - 0.3) * 0.02 * base
            } else {
                (r - 0.5) * 0.02 * base
            };
            current += step;

            // Compare after rounding; a cent is the smallest visible gain.
            if overweight && hour == last_hour && round2(current) <= base {
                let r: f64 = self.rng.r#gen();
                current = base + 0.01 + (r * 0.03 * base).abs();
            }

            series.push(ChartPoint {
                time: format!("{}:00", hour),
                value: round2(current),
                color: overweight.then(|| Trend::Up.stroke().to_string()),
            });
        }

        series
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
