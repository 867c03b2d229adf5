use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use thong_ratatui_extra::candle_chart::{CandleChart, CandlePoint};

use super::{
    engine::{ChartApi, Interaction, RenderEngine, RenderError, SeriesId},
    options::{CandlestickSeriesOptions, ChartOptions},
};

pub const MIN_CHART_WIDTH: u16 = 20;
pub const MIN_CHART_HEIGHT: u16 = 6;

/// Draws charts into the terminal buffer with the candle chart widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalEngine;

impl RenderEngine for TerminalEngine {
    type Chart = TerminalChart;

    fn create_chart(
        &self,
        container: Rect,
        options: &ChartOptions,
    ) -> Result<TerminalChart, RenderError> {
        let height = options.height.min(container.height);
        if container.width < MIN_CHART_WIDTH || height < MIN_CHART_HEIGHT {
            return Err(RenderError::ContainerTooSmall {
                width: container.width,
                height,
                min_width: MIN_CHART_WIDTH,
                min_height: MIN_CHART_HEIGHT,
            });
        }

        Ok(TerminalChart {
            inner: CandleChart::new(container.width, options.height).with_chart_style(options.into()),
            has_series: false,
            removed: false,
        })
    }
}

#[derive(Debug)]
pub struct TerminalChart {
    inner: CandleChart,
    has_series: bool,
    removed: bool,
}

impl TerminalChart {
    pub fn candle_chart(&self) -> &CandleChart {
        &self.inner
    }

    fn check_series(&self, series: SeriesId) -> Result<(), RenderError> {
        if self.removed {
            return Err(RenderError::ChartRemoved);
        }
        if !self.has_series || series != SeriesId(0) {
            return Err(RenderError::Engine(format!("unknown series {}", series.0)));
        }
        Ok(())
    }
}

impl ChartApi for TerminalChart {
    fn add_candlestick_series(
        &mut self,
        options: &CandlestickSeriesOptions,
    ) -> Result<SeriesId, RenderError> {
        if self.removed {
            return Err(RenderError::ChartRemoved);
        }
        if self.has_series {
            return Err(RenderError::SeriesLimitReached);
        }
        self.inner.set_series_style(options.into());
        self.has_series = true;
        Ok(SeriesId(0))
    }

    fn series_by_index(&self, index: usize) -> Option<SeriesId> {
        (!self.removed && self.has_series && index == 0).then_some(SeriesId(0))
    }

    fn set_series_data(
        &mut self,
        series: SeriesId,
        points: Vec<CandlePoint>,
    ) -> Result<(), RenderError> {
        self.check_series(series)?;
        self.inner.set_data(points);
        Ok(())
    }

    fn fit_content(&mut self) {
        if !self.removed {
            self.inner.fit_content();
        }
    }

    fn apply_width(&mut self, width: u16) {
        if !self.removed {
            let (_, height) = self.inner.size();
            self.inner.resize(width, height);
        }
    }

    fn interact(&mut self, interaction: Interaction) {
        if self.removed {
            return;
        }
        match interaction {
            Interaction::ZoomIn => self.inner.zoom_in(),
            Interaction::ZoomOut => self.inner.zoom_out(),
            Interaction::ScrollLeft(bars) => self.inner.scroll_left(bars),
            Interaction::ScrollRight(bars) => self.inner.scroll_right(bars),
            Interaction::FitContent => self.inner.fit_content(),
            Interaction::Hover(position) => self.inner.set_crosshair(position),
        }
    }

    fn remove(&mut self) {
        self.removed = true;
        self.inner.set_data(Vec::new());
        self.has_series = false;
    }

    fn is_removed(&self) -> bool {
        self.removed
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if !self.removed {
            (&self.inner).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Position;
    use thong_ratatui_extra::candle_chart::Viewport;

    use super::*;

    fn point(day: i64, close: f64) -> CandlePoint {
        CandlePoint::new(1672704000 + day * 86400, 100.0, 110.0, 90.0, close)
    }

    fn chart() -> TerminalChart {
        let mut chart = TerminalEngine
            .create_chart(Rect::new(0, 0, 60, 20), &ChartOptions::dark(60, 12))
            .unwrap();
        chart
            .add_candlestick_series(&CandlestickSeriesOptions::default())
            .unwrap();
        chart
    }

    #[test]
    fn create_uses_container_width_and_fixed_height() {
        let chart = chart();

        assert_eq!(chart.candle_chart().size(), (60, 12));
        assert!(chart.candle_chart().chart_style().crosshair);
        assert_eq!(
            chart.candle_chart().series_style().up,
            ratatui::style::Color::Rgb(0x10, 0xb9, 0x81)
        );
    }

    #[test]
    fn create_rejects_small_container() {
        let err = TerminalEngine
            .create_chart(Rect::new(0, 0, 12, 20), &ChartOptions::dark(12, 12))
            .unwrap_err();

        assert_eq!(
            err,
            RenderError::ContainerTooSmall {
                width: 12,
                height: 12,
                min_width: MIN_CHART_WIDTH,
                min_height: MIN_CHART_HEIGHT,
            }
        );
        assert_eq!(
            err.to_string(),
            "container too small (12x12, need at least 20x6)"
        );
    }

    #[test]
    fn create_counts_visible_rows() {
        let err = TerminalEngine
            .create_chart(Rect::new(0, 0, 60, 4), &ChartOptions::dark(60, 12))
            .unwrap_err();

        assert!(matches!(err, RenderError::ContainerTooSmall { height: 4, .. }));
    }

    #[test]
    fn single_series_only() {
        let mut chart = chart();

        assert_eq!(chart.series_by_index(0), Some(SeriesId(0)));
        assert_eq!(chart.series_by_index(1), None);
        assert_eq!(
            chart.add_candlestick_series(&CandlestickSeriesOptions::default()),
            Err(RenderError::SeriesLimitReached)
        );
    }

    #[test]
    fn data_is_sorted_and_replaced() {
        let mut chart = chart();

        chart
            .set_series_data(SeriesId(0), vec![point(2, 95.0), point(0, 105.0), point(1, 101.0)])
            .unwrap();
        let times = chart
            .candle_chart()
            .points()
            .iter()
            .map(|p| p.time)
            .collect::<Vec<_>>();
        assert_eq!(times, vec![1672704000, 1672790400, 1672876800]);

        chart
            .set_series_data(SeriesId(0), vec![point(5, 99.0)])
            .unwrap();
        assert_eq!(chart.candle_chart().points().len(), 1);
    }

    #[test]
    fn interactions_reach_the_widget() {
        let mut chart = chart();
        chart
            .set_series_data(SeriesId(0), (0..5).map(|d| point(d, 101.0)).collect())
            .unwrap();

        chart.interact(Interaction::ZoomIn);
        assert!(matches!(chart.candle_chart().viewport(), Viewport::Window { .. }));

        chart.interact(Interaction::FitContent);
        assert_eq!(chart.candle_chart().viewport(), Viewport::Fit);

        chart.interact(Interaction::Hover(Some(Position::new(3, 2))));
        assert_eq!(chart.candle_chart().crosshair(), Some(Position::new(3, 2)));
    }

    #[test]
    fn apply_width_keeps_height() {
        let mut chart = chart();

        chart.apply_width(80);

        assert_eq!(chart.candle_chart().size(), (80, 12));
    }

    #[test]
    fn removed_chart_rejects_mutation() {
        let mut chart = chart();
        chart
            .set_series_data(SeriesId(0), vec![point(0, 101.0)])
            .unwrap();

        chart.remove();
        chart.apply_width(80);

        assert!(chart.is_removed());
        assert_eq!(chart.series_by_index(0), None);
        assert_eq!(
            chart.set_series_data(SeriesId(0), vec![point(1, 101.0)]),
            Err(RenderError::ChartRemoved)
        );
        assert!(chart.candle_chart().points().is_empty());
        assert_eq!(chart.candle_chart().size(), (60, 12));
    }
}
