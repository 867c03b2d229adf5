use std::sync::mpsc;

use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind},
    layout::{Constraint, Layout, Position, Rect},
    text::Line,
    widgets::Widget,
};
use strum::{Display, EnumIter};
use thong_ratatui_extra::{
    button::Button,
    error_banner::ErrorBanner,
    extensions::{EventExt, MouseEventExt, RectExt},
    form::{Form, FormEvent, FormItemIndex, FormWidget},
    input_box::InputBox,
    thematize::Thematize,
};
use thong_utils::{
    stock::{parse_date, Query},
    task::CancellableTask,
};
use tokio_util::sync::CancellationToken;

use crate::{
    app::SharedState,
    chart::{
        candle_points, CandlestickSeriesOptions, ChartApi, ChartHandle, ChartLifecycle,
        ChartOptions, Interaction, RenderEngine,
    },
    events::{
        fetch::{spawn_fetch, BarSource},
        AppEvent, FetchOrigin, FetchOutcome,
    },
    traits::{Actions, Component},
};

pub const NO_DATA_MESSAGE: &str = "No data received from backend";
pub const SERIES_NOT_FOUND_MESSAGE: &str = "Candlestick series not found";

/// Bars moved per pan key press.
const PAN_BARS: usize = 5;

#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq)]
pub enum FormItem {
    Symbol,
    StartDate,
    EndDate,
    UpdateChart,
}

impl FormItemIndex for FormItem {
    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<FormItem> for FormWidget {
    type Error = crate::Error;

    fn try_from(value: FormItem) -> crate::Result<Self> {
        let widget = match value {
            FormItem::Symbol => FormWidget::InputBox {
                widget: InputBox::new("Symbol").with_width(12).with_uppercase(),
            },
            FormItem::StartDate => FormWidget::InputBox {
                widget: InputBox::new("Start Date")
                    .with_width(15)
                    .with_empty_text("YYYY-MM-DD"),
            },
            FormItem::EndDate => FormWidget::InputBox {
                widget: InputBox::new("End Date")
                    .with_width(15)
                    .with_empty_text("YYYY-MM-DD"),
            },
            FormItem::UpdateChart => FormWidget::Button {
                widget: Button::new("Update Chart"),
            },
        };
        Ok(widget)
    }
}

/// Query form, error banner and one candlestick chart.
///
/// The chart is created when [`ChartView::mount`] is given a container and
/// recreated whenever the form holds a new valid query. Every fetch carries a
/// sequence number, only the answer to the latest one is applied.
pub struct ChartView<E: RenderEngine, S: BarSource> {
    engine: E,
    source: S,
    form: Form<FormItem, crate::Error>,
    query: Query,
    lifecycle: ChartLifecycle<E::Chart>,
    error: Option<String>,
    next_seq: u64,
    latest_seq: Option<u64>,
    fetch_task: Option<CancellableTask>,
    chart_height: u16,
    max_width: u16,
    hovering: bool,
}

impl<E: RenderEngine, S: BarSource> ChartView<E, S> {
    pub fn new(
        engine: E,
        source: S,
        query: Query,
        chart_height: u16,
        max_width: u16,
    ) -> crate::Result<Self> {
        let form = Form::<FormItem, crate::Error>::init(|form| {
            form.set_text(FormItem::Symbol, query.symbol().to_string())?;
            form.set_text(FormItem::StartDate, query.start_str())?;
            form.set_text(FormItem::EndDate, query.end_str())?;
            Ok(())
        })?;

        Ok(Self {
            engine,
            source,
            form,
            query,
            lifecycle: ChartLifecycle::Uninitialized,
            error: None,
            next_seq: 0,
            latest_seq: None,
            fetch_task: None,
            chart_height,
            max_width,
            hovering: false,
        })
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn lifecycle(&self) -> &ChartLifecycle<E::Chart> {
        &self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.latest_seq.is_some()
    }

    pub fn form(&self) -> &Form<FormItem, crate::Error> {
        &self.form
    }

    /// Hands the in-flight fetch over, so a caller can wait for it to wind
    /// down after cancelling.
    pub fn take_fetch_task(&mut self) -> Option<CancellableTask> {
        self.latest_seq = None;
        self.fetch_task.take()
    }

    /// Creates the chart in the container carved out of `area` and fetches
    /// the current query. A chart that cannot be created leaves the view
    /// failed with the reason shown, and nothing is fetched.
    pub fn mount(
        &mut self,
        area: Rect,
        transmitter: &mpsc::Sender<AppEvent>,
        shared_state: &SharedState,
    ) -> crate::Result<()> {
        let container = self.areas(area)[3];
        let options = ChartOptions::dark(container.width, self.chart_height);

        match ChartHandle::create(
            &self.engine,
            container,
            &options,
            &CandlestickSeriesOptions::default(),
            &shared_state.window,
        ) {
            Ok(handle) => {
                self.lifecycle = ChartLifecycle::Ready(handle);
                self.fetch(FetchOrigin::Mount, transmitter);
                Ok(())
            }
            Err(crate::Error::Render(e)) => {
                let message = format!("Failed to initialize chart: {e}");
                tracing::warn!(%message, "chart creation failed");
                self.error = Some(message.clone());
                self.lifecycle = ChartLifecycle::Failed(message);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Releases the chart and its resize listener and cancels the pending
    /// fetch. Answers arriving afterwards are dropped.
    pub fn unmount(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.cancel();
        }
        self.latest_seq = None;
        self.hovering = false;
        self.lifecycle.dispose();
    }

    fn remount(
        &mut self,
        area: Rect,
        transmitter: &mpsc::Sender<AppEvent>,
        shared_state: &SharedState,
    ) -> crate::Result<()> {
        self.unmount();
        self.mount(area, transmitter, shared_state)
    }

    fn fetch(&mut self, origin: FetchOrigin, transmitter: &mpsc::Sender<AppEvent>) {
        if let Some(task) = self.fetch_task.take() {
            task.cancel();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_seq = Some(seq);
        self.fetch_task = Some(spawn_fetch(
            &self.source,
            self.query.clone(),
            seq,
            origin,
            transmitter.clone(),
        ));
    }

    /// The query typed into the form, or why it is not one.
    fn read_query(&self) -> crate::Result<thong_utils::Result<Query>> {
        Ok(Query::parse(
            self.form.get_text(FormItem::Symbol)?,
            self.form.get_text(FormItem::StartDate)?,
            self.form.get_text(FormItem::EndDate)?,
        ))
    }

    fn mark_invalid_fields(&mut self) -> crate::Result<()> {
        let symbol_invalid = self.form.get_text(FormItem::Symbol)?.trim().is_empty();
        let start = parse_date(self.form.get_text(FormItem::StartDate)?).ok();
        let end = parse_date(self.form.get_text(FormItem::EndDate)?).ok();
        let inverted = matches!((start, end), (Some(start), Some(end)) if start > end);

        self.form.set_invalid(FormItem::Symbol, symbol_invalid)?;
        self.form.set_invalid(FormItem::StartDate, start.is_none())?;
        self.form.set_invalid(FormItem::EndDate, end.is_none() || inverted)?;
        Ok(())
    }

    fn on_value_changed(
        &mut self,
        area: Rect,
        transmitter: &mpsc::Sender<AppEvent>,
        shared_state: &SharedState,
    ) -> crate::Result<()> {
        self.mark_invalid_fields()?;
        match self.read_query()? {
            Ok(query) if query != self.query => {
                tracing::debug!(%query, "query changed");
                self.query = query;
                self.remount(area, transmitter, shared_state)
            }
            _ => Ok(()),
        }
    }

    fn submit(
        &mut self,
        area: Rect,
        transmitter: &mpsc::Sender<AppEvent>,
        shared_state: &SharedState,
    ) -> crate::Result<()> {
        let query = match self.read_query()? {
            Ok(query) => query,
            Err(e) => {
                self.error = Some(e.user_message());
                return Ok(());
            }
        };
        self.query = query;

        if self.lifecycle.is_ready() {
            self.fetch(FetchOrigin::Submit, transmitter);
            Ok(())
        } else {
            self.remount(area, transmitter, shared_state)
        }
    }

    fn on_bars_fetched(&mut self, outcome: &FetchOutcome) {
        if self.latest_seq != Some(outcome.seq) {
            tracing::debug!(
                seq = outcome.seq,
                latest = ?self.latest_seq,
                "stale response dropped"
            );
            return;
        }
        self.latest_seq = None;
        self.fetch_task = None;

        let Some(handle) = self.lifecycle.handle_mut() else {
            tracing::debug!(seq = outcome.seq, "no chart for response");
            return;
        };

        let bars = match &outcome.result {
            Ok(bars) => bars,
            Err(e) => {
                self.error = Some(e.user_message());
                return;
            }
        };
        if bars.is_empty() {
            self.error = Some(NO_DATA_MESSAGE.to_string());
            return;
        }

        let series = match outcome.origin {
            FetchOrigin::Mount => Some(handle.series()),
            FetchOrigin::Submit => handle.chart().series_by_index(0),
        };
        let Some(series) = series else {
            self.error = Some(SERIES_NOT_FOUND_MESSAGE.to_string());
            return;
        };

        let chart = handle.chart_mut();
        match chart.set_series_data(series, candle_points(bars)) {
            Ok(()) => {
                chart.fit_content();
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Chart keys and mouse over the chart, returns whether the event was
    /// used.
    fn handle_chart_input(&mut self, input: &Event, chart_area: Rect, actions: &mut Actions) -> bool {
        let Some(handle) = self.lifecycle.handle_mut() else {
            return false;
        };
        let chart = handle.chart_mut();

        if let Some(key_event) = input.key_event() {
            if key_event.kind != KeyEventKind::Press {
                return false;
            }
            let interaction = match (key_event.code, key_event.modifiers) {
                (KeyCode::PageUp, KeyModifiers::NONE) => Interaction::ZoomIn,
                (KeyCode::PageDown, KeyModifiers::NONE) => Interaction::ZoomOut,
                (KeyCode::Left, KeyModifiers::SHIFT) => Interaction::ScrollLeft(PAN_BARS),
                (KeyCode::Right, KeyModifiers::SHIFT) => Interaction::ScrollRight(PAN_BARS),
                (KeyCode::Char('r'), KeyModifiers::CONTROL) => Interaction::FitContent,
                (KeyCode::Esc, KeyModifiers::NONE) if self.hovering => {
                    self.hovering = false;
                    actions.ignore_esc();
                    Interaction::Hover(None)
                }
                _ => return false,
            };
            chart.interact(interaction);
            return true;
        }

        if let Some(mouse_event) = input.mouse_event() {
            let position = mouse_event.position();
            let inside = chart_area.contains(position);
            match mouse_event.kind {
                MouseEventKind::Moved if inside => {
                    self.hovering = true;
                    chart.interact(Interaction::Hover(Some(Position::new(
                        position.x - chart_area.x,
                        position.y - chart_area.y,
                    ))));
                    return true;
                }
                MouseEventKind::Moved if self.hovering => {
                    self.hovering = false;
                    chart.interact(Interaction::Hover(None));
                }
                MouseEventKind::ScrollUp if inside => {
                    chart.interact(Interaction::ZoomIn);
                    return true;
                }
                MouseEventKind::ScrollDown if inside => {
                    chart.interact(Interaction::ZoomOut);
                    return true;
                }
                _ => {}
            }
        }

        false
    }

    fn apply_pending_resize(&mut self, area: Rect) -> crate::Result<()> {
        let width = self.areas(area)[3].width;
        if let Some(handle) = self.lifecycle.handle_mut() {
            if let Some(size) = handle.take_resize()? {
                tracing::debug!(window = ?size, width, "chart width applied");
                handle.chart_mut().apply_width(width);
            }
        }
        Ok(())
    }

    /// Form, status line, error banner and chart, at most `max_width` wide.
    fn areas(&self, area: Rect) -> [Rect; 4] {
        let area = area.change_width(area.width.min(self.max_width));
        let error_height = self
            .error
            .as_deref()
            .map(|message| ErrorBanner::new(message).height(area.width))
            .unwrap_or(0);

        let [form_area, status_area, error_area, chart_area] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Min(0),
        ])
        .areas(area);

        [
            form_area,
            status_area,
            error_area,
            chart_area.change_height(chart_area.height.min(self.chart_height)),
        ]
    }

    fn status_text(&self) -> String {
        if self.is_loading() {
            format!("Loading {}…", self.query)
        } else {
            self.query.to_string()
        }
    }
}

impl<E: RenderEngine, S: BarSource> Component for ChartView<E, S> {
    fn handle_event(
        &mut self,
        event: &AppEvent,
        area: Rect,
        transmitter: &mpsc::Sender<AppEvent>,
        _shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> crate::Result<Actions> {
        let mut actions = Actions::default();

        match event {
            AppEvent::BarsFetched(outcome) => self.on_bars_fetched(outcome),
            AppEvent::Input(input) => {
                let [form_area, _, _, chart_area] = self.areas(area);
                if !self.handle_chart_input(input, chart_area, &mut actions) {
                    match self.form.handle_event(Some(input), form_area)? {
                        Some(FormEvent::ButtonPressed(_)) => {
                            self.submit(area, transmitter, shared_state)?
                        }
                        Some(FormEvent::ValueChanged(_)) => {
                            self.on_value_changed(area, transmitter, shared_state)?
                        }
                        None => {}
                    }
                }
            }
        }

        self.apply_pending_resize(area)?;
        Ok(actions)
    }

    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized,
    {
        let theme = &shared_state.theme;
        let [form_area, status_area, error_area, chart_area] = self.areas(area);

        self.form.render(form_area, buf, theme);

        Line::from(self.status_text())
            .style(theme.style_dim())
            .render(status_area.margin_h(1), buf);

        if let Some(message) = &self.error {
            ErrorBanner::new(message).render(error_area, buf, theme);
        }

        if let Some(handle) = self.lifecycle.handle() {
            handle.chart().render(chart_area, buf);
        }

        area
    }
}
