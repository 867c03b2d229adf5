use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::Value;
use thong_utils::stock::DailyBar;

/// Canned answer for one symbol.
#[derive(Debug, Clone)]
pub enum Fixture {
    Bars(Vec<DailyBar>),
    /// Any status and JSON body, for rejections and malformed answers.
    Response { status: u16, body: Value },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Bars(Vec<DailyBar>),
    Response { status: u16, body: Value },
    NotFound,
}

#[derive(Debug, Clone, Default)]
pub struct BarStore {
    fixtures: HashMap<String, Fixture>,
    synthetic: bool,
}

impl BarStore {
    /// Symbols without a fixture get a random walk.
    pub fn synthetic() -> Self {
        Self {
            fixtures: HashMap::new(),
            synthetic: true,
        }
    }

    /// Symbols without a fixture are not found.
    pub fn fixtures_only() -> Self {
        Self::default()
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<DailyBar>) -> Self {
        self.fixtures
            .insert(symbol.to_uppercase(), Fixture::Bars(bars));
        self
    }

    pub fn with_response(mut self, symbol: &str, status: u16, body: Value) -> Self {
        self.fixtures
            .insert(symbol.to_uppercase(), Fixture::Response { status, body });
        self
    }

    /// Fixture bars are cut to `[start, end]`, an empty cut is not found.
    pub fn lookup(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Lookup {
        match self.fixtures.get(symbol) {
            Some(Fixture::Bars(bars)) => {
                let bars = bars
                    .iter()
                    .filter(|bar| bar.date >= start && bar.date <= end)
                    .copied()
                    .collect::<Vec<_>>();
                if bars.is_empty() {
                    Lookup::NotFound
                } else {
                    Lookup::Bars(bars)
                }
            }
            Some(Fixture::Response { status, body }) => Lookup::Response {
                status: *status,
                body: body.clone(),
            },
            None if self.synthetic => Lookup::Bars(random_walk(symbol, start, end)),
            None => Lookup::NotFound,
        }
    }
}

fn symbol_seed(symbol: &str) -> u64 {
    // FNV-1a
    symbol.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One bar per weekday in `[start, end]`, the same symbol and range always
/// give the same bars.
pub fn random_walk(symbol: &str, start: NaiveDate, end: NaiveDate) -> Vec<DailyBar> {
    let seed = symbol_seed(symbol);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut close = 20.0 + (seed % 400) as f64;

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .map(|date| {
            let open = close;
            close = round_cents((open * (1.0 + rng.gen_range(-0.03..0.03))).max(1.0));
            let high = round_cents(open.max(close) * (1.0 + rng.gen_range(0.0..0.015)));
            let low = round_cents(open.min(close) * (1.0 - rng.gen_range(0.0..0.015)));
            DailyBar {
                date,
                open,
                high,
                low,
                close,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        thong_utils::stock::parse_date(s).unwrap()
    }

    #[test]
    fn random_walk_skips_weekends() {
        // 2024-01-01 is a Monday
        let bars = random_walk("AAPL", date("2024-01-01"), date("2024-01-14"));
        assert_eq!(bars.len(), 10);
        assert!(bars
            .iter()
            .all(|bar| !matches!(bar.date.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn random_walk_is_deterministic() {
        let a = random_walk("MSFT", date("2023-01-01"), date("2023-03-01"));
        let b = random_walk("MSFT", date("2023-01-01"), date("2023-03-01"));
        let c = random_walk("TSLA", date("2023-01-01"), date("2023-03-01"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_walk_bars_are_consistent() {
        let bars = random_walk("NVDA", date("2023-01-01"), date("2023-12-31"));
        for pair in bars.windows(2) {
            assert!(pair[0].date < pair[1].date);
            assert_eq!(pair[1].open, pair[0].close);
        }
        for bar in &bars {
            assert!(bar.high >= bar.open.max(bar.close));
            assert!(bar.low <= bar.open.min(bar.close));
        }
    }

    #[test]
    fn weekend_only_range_is_empty() {
        // Saturday and Sunday
        assert!(random_walk("AAPL", date("2024-01-06"), date("2024-01-07")).is_empty());
    }

    #[test]
    fn fixture_bars_are_cut_to_range() {
        let bar = |d: &str| DailyBar {
            date: date(d),
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
        };
        let store = BarStore::fixtures_only().with_bars(
            "aapl",
            vec![bar("2023-01-03"), bar("2023-06-01"), bar("2024-02-01")],
        );

        assert_eq!(
            store.lookup("AAPL", date("2023-01-01"), date("2024-01-01")),
            Lookup::Bars(vec![bar("2023-01-03"), bar("2023-06-01")])
        );
        assert_eq!(
            store.lookup("AAPL", date("2025-01-01"), date("2025-02-01")),
            Lookup::NotFound
        );
        assert_eq!(
            store.lookup("MSFT", date("2023-01-01"), date("2024-01-01")),
            Lookup::NotFound
        );
    }

    #[test]
    fn failure_fixture() {
        let store = BarStore::synthetic().with_response("BAD", 500, json!({"error": "boom"}));

        assert_eq!(
            store.lookup("BAD", date("2023-01-01"), date("2024-01-01")),
            Lookup::Response {
                status: 500,
                body: json!({"error": "boom"})
            }
        );
    }
}
