use thong_ratatui_extra::candle_chart::CandlePoint;
use thong_utils::stock::DailyBar;

pub mod engine;
pub mod lifecycle;
pub mod options;
pub mod terminal;

pub use engine::{ChartApi, Interaction, RenderEngine, RenderError, SeriesId};
pub use lifecycle::{ChartHandle, ChartLifecycle};
pub use options::{CandlestickSeriesOptions, ChartOptions};
pub use terminal::{TerminalChart, TerminalEngine};

/// Bars in the chart's own format, the time of each point is the bar's date
/// at midnight UTC.
pub fn candle_points(bars: &[DailyBar]) -> Vec<CandlePoint> {
    bars.iter()
        .map(|bar| CandlePoint::new(bar.timestamp(), bar.open, bar.high, bar.low, bar.close))
        .collect()
}
