//! Terminal candlestick chart of daily stock prices.
//!
//! A query form (symbol, start and end date) drives one candlestick chart.
//! Bars are fetched from the backend's `/api/stock/{symbol}` endpoint.

use std::str::FromStr;

use thong_utils::{config::Config, stock::StockApi};

mod error;
pub use error::{Error, Result};

mod app;
pub mod chart;
pub mod events;
pub mod pages;
pub mod theme;
mod traits;
pub mod window;

#[cfg(test)]
mod testutils;

pub use app::{App, SharedState};
pub use events::AppEvent;
pub use traits::{Actions, Component};

use chart::TerminalEngine;
use pages::chart_view::ChartView;
use theme::{Theme, ThemeName};

/// Runs the chart until the user quits.
pub async fn run(config: &Config) -> crate::Result<()> {
    let theme = Theme::new(ThemeName::from_str(&config.theme_name)?);
    let source = StockApi::new(&config.backend_url)?;
    let query = config.default_query()?;
    tracing::info!(backend = %config.backend_url, %query, "starting");

    let chart_view = ChartView::new(
        TerminalEngine,
        source,
        query,
        config.chart_height,
        config.max_chart_width,
    )?;
    App::new(chart_view, theme).run().await
}
