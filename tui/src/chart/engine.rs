use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};
use thong_ratatui_extra::candle_chart::CandlePoint;

use super::options::{CandlestickSeriesOptions, ChartOptions};

/// Index of a series within its chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeriesId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("container too small ({width}x{height}, need at least {min_width}x{min_height})")]
    ContainerTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("chart supports a single series")]
    SeriesLimitReached,

    #[error("chart was removed")]
    ChartRemoved,

    #[error("{0}")]
    Engine(String),
}

/// View changes a user can ask a chart for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    ZoomIn,
    ZoomOut,
    ScrollLeft(usize),
    ScrollRight(usize),
    FitContent,
    /// Crosshair position relative to the chart's top left corner.
    Hover(Option<Position>),
}

/// One live chart created by a [`RenderEngine`].
pub trait ChartApi {
    fn add_candlestick_series(
        &mut self,
        options: &CandlestickSeriesOptions,
    ) -> Result<SeriesId, RenderError>;

    fn series_by_index(&self, index: usize) -> Option<SeriesId>;

    /// Replaces the whole dataset of `series`.
    fn set_series_data(
        &mut self,
        series: SeriesId,
        points: Vec<CandlePoint>,
    ) -> Result<(), RenderError>;

    /// Fits the visible time range to all data.
    fn fit_content(&mut self);

    /// Sets the width, the height stays as created.
    fn apply_width(&mut self, width: u16);

    fn interact(&mut self, interaction: Interaction);

    /// Detaches the chart, later mutations are rejected or ignored.
    fn remove(&mut self);

    fn is_removed(&self) -> bool;

    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Creates charts bound to a container.
pub trait RenderEngine {
    type Chart: ChartApi;

    fn create_chart(
        &self,
        container: Rect,
        options: &ChartOptions,
    ) -> Result<Self::Chart, RenderError>;
}
