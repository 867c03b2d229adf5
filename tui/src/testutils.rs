//! Fakes for driving [`ChartView`](crate::pages::chart_view::ChartView)
//! without a terminal or a backend.

use std::{
    future::Future,
    sync::{mpsc, Arc, Mutex},
    time::Duration,
};

use ratatui::{
    buffer::Buffer,
    crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
        MouseEventKind,
    },
    layout::{Rect, Size},
};
use thong_ratatui_extra::candle_chart::CandlePoint;
use thong_utils::stock::{DailyBar, Query};
use tokio::sync::oneshot;

use crate::{
    app::SharedState,
    chart::{
        CandlestickSeriesOptions, ChartApi, ChartOptions, Interaction, RenderEngine, RenderError,
        SeriesId,
    },
    events::{fetch::BarSource, AppEvent},
    theme::{Theme, ThemeName},
    window::Window,
};

/// Everything the charts of one [`RecordingEngine`] were asked to do.
#[derive(Debug, Default)]
pub struct EngineLog {
    pub created: Vec<(Rect, ChartOptions)>,
    pub removed: usize,
    pub series_added: usize,
    pub data: Vec<Vec<CandlePoint>>,
    pub fits: usize,
    pub widths: Vec<u16>,
    pub interactions: Vec<Interaction>,
    /// Calls made on a chart after it was removed.
    pub after_remove: usize,
}

#[derive(Clone, Debug, Default)]
pub struct RecordingEngine {
    pub log: Arc<Mutex<EngineLog>>,
    pub fail_create: Option<RenderError>,
    pub fail_series: bool,
    /// Series lookups by index find nothing.
    pub lose_series: bool,
}

impl RecordingEngine {
    pub fn log(&self) -> std::sync::MutexGuard<'_, EngineLog> {
        self.log.lock().unwrap()
    }
}

impl RenderEngine for RecordingEngine {
    type Chart = RecordingChart;

    fn create_chart(
        &self,
        container: Rect,
        options: &ChartOptions,
    ) -> Result<RecordingChart, RenderError> {
        if let Some(err) = &self.fail_create {
            return Err(err.clone());
        }
        self.log().created.push((container, *options));
        Ok(RecordingChart {
            log: Arc::clone(&self.log),
            fail_series: self.fail_series,
            lose_series: self.lose_series,
            has_series: false,
            removed: false,
        })
    }
}

#[derive(Debug)]
pub struct RecordingChart {
    log: Arc<Mutex<EngineLog>>,
    fail_series: bool,
    lose_series: bool,
    has_series: bool,
    removed: bool,
}

impl RecordingChart {
    fn record(&self, f: impl FnOnce(&mut EngineLog)) {
        let mut log = self.log.lock().unwrap();
        if self.removed {
            log.after_remove += 1;
        } else {
            f(&mut log);
        }
    }
}

impl ChartApi for RecordingChart {
    fn add_candlestick_series(
        &mut self,
        _options: &CandlestickSeriesOptions,
    ) -> Result<SeriesId, RenderError> {
        if self.fail_series {
            return Err(RenderError::Engine("series rejected".to_string()));
        }
        self.has_series = true;
        self.record(|log| log.series_added += 1);
        Ok(SeriesId(0))
    }

    fn series_by_index(&self, index: usize) -> Option<SeriesId> {
        (self.has_series && !self.lose_series && index == 0).then_some(SeriesId(0))
    }

    fn set_series_data(
        &mut self,
        _series: SeriesId,
        points: Vec<CandlePoint>,
    ) -> Result<(), RenderError> {
        if self.removed {
            self.record(|_| {});
            return Err(RenderError::ChartRemoved);
        }
        self.record(|log| log.data.push(points));
        Ok(())
    }

    fn fit_content(&mut self) {
        self.record(|log| log.fits += 1);
    }

    fn apply_width(&mut self, width: u16) {
        self.record(|log| log.widths.push(width));
    }

    fn interact(&mut self, interaction: Interaction) {
        self.record(|log| log.interactions.push(interaction));
    }

    fn remove(&mut self) {
        if !self.removed {
            self.removed = true;
            self.log.lock().unwrap().removed += 1;
        }
    }

    fn is_removed(&self) -> bool {
        self.removed
    }

    fn render(&self, _area: Rect, _buf: &mut Buffer) {}
}

type Reply = oneshot::Sender<thong_utils::Result<Vec<DailyBar>>>;

/// A bar source answered by hand, one reply per fetch.
#[derive(Clone, Debug, Default)]
pub struct ManualSource {
    pending: Arc<Mutex<Vec<(Query, Option<Reply>)>>>,
}

impl ManualSource {
    pub fn requests(&self) -> Vec<Query> {
        self.pending
            .lock()
            .unwrap()
            .iter()
            .map(|(query, _)| query.clone())
            .collect()
    }

    /// Answers the `index`th fetch.
    pub fn reply(&self, index: usize, result: thong_utils::Result<Vec<DailyBar>>) {
        let reply = self.pending.lock().unwrap()[index].1.take().unwrap();
        let _ = reply.send(result);
    }
}

impl BarSource for ManualSource {
    fn fetch_bars(
        &self,
        query: Query,
    ) -> impl Future<Output = thong_utils::Result<Vec<DailyBar>>> + Send + 'static {
        let (tr, rc) = oneshot::channel();
        self.pending.lock().unwrap().push((query, Some(tr)));
        async move { rc.await.unwrap_or_else(|_| Ok(Vec::new())) }
    }
}

pub fn shared_state(width: u16, height: u16) -> SharedState {
    SharedState {
        theme: Theme::new(ThemeName::Monochrome),
        window: Window::new(Size::new(width, height)),
    }
}

pub fn bar(date: &str, open: f64, high: f64, low: f64, close: f64) -> DailyBar {
    DailyBar {
        date: thong_utils::stock::parse_date(date).unwrap(),
        open,
        high,
        low,
        close,
    }
}

/// Waits for the next event a spawned fetch sends.
pub fn next_event(rc: &mpsc::Receiver<AppEvent>) -> AppEvent {
    rc.recv_timeout(Duration::from_secs(5))
        .expect("no event within 5s")
}

pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }))
}

pub fn key(code: KeyCode) -> AppEvent {
    key_with(code, KeyModifiers::NONE)
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
    AppEvent::Input(Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}
