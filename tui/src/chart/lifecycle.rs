use ratatui::layout::Rect;

use super::{
    engine::{ChartApi, RenderEngine, SeriesId},
    options::{CandlestickSeriesOptions, ChartOptions},
};
use crate::window::{ResizeSubscription, Window};

/// One chart with its candlestick series and resize listener. Dropping the
/// handle removes the chart and unregisters the listener.
#[derive(Debug)]
pub struct ChartHandle<C: ChartApi> {
    chart: C,
    series: SeriesId,
    resize: ResizeSubscription,
}

impl<C: ChartApi> ChartHandle<C> {
    /// A chart whose series cannot be added is removed before returning.
    pub fn create<E>(
        engine: &E,
        container: Rect,
        options: &ChartOptions,
        series_options: &CandlestickSeriesOptions,
        window: &Window,
    ) -> crate::Result<Self>
    where
        E: RenderEngine<Chart = C>,
    {
        let mut chart = engine.create_chart(container, options)?;
        let series = match chart.add_candlestick_series(series_options) {
            Ok(series) => series,
            Err(e) => {
                chart.remove();
                return Err(e.into());
            }
        };
        let resize = match window.add_resize_listener() {
            Ok(resize) => resize,
            Err(e) => {
                chart.remove();
                return Err(e);
            }
        };

        tracing::info!(
            width = options.width,
            height = options.height,
            "chart created"
        );
        Ok(Self {
            chart,
            series,
            resize,
        })
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut C {
        &mut self.chart
    }

    /// The series added at creation.
    pub fn series(&self) -> SeriesId {
        self.series
    }

    pub fn take_resize(&self) -> crate::Result<Option<ratatui::layout::Size>> {
        self.resize.take_resize()
    }
}

impl<C: ChartApi> Drop for ChartHandle<C> {
    fn drop(&mut self) {
        self.chart.remove();
        tracing::info!("chart disposed");
    }
}

#[derive(Debug)]
pub enum ChartLifecycle<C: ChartApi> {
    Uninitialized,
    Ready(ChartHandle<C>),
    /// Creation failed, the message is shown instead of a chart.
    Failed(String),
    Disposed,
}

impl<C: ChartApi> Default for ChartLifecycle<C> {
    fn default() -> Self {
        ChartLifecycle::Uninitialized
    }
}

impl<C: ChartApi> ChartLifecycle<C> {
    pub fn handle(&self) -> Option<&ChartHandle<C>> {
        match self {
            ChartLifecycle::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn handle_mut(&mut self) -> Option<&mut ChartHandle<C>> {
        match self {
            ChartLifecycle::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ChartLifecycle::Ready(_))
    }

    /// Drops the handle if there is one.
    pub fn dispose(&mut self) {
        *self = ChartLifecycle::Disposed;
    }
}
