use std::{
    io::{self, stdout},
    sync::mpsc,
    thread::JoinHandle,
};

use ratatui::{
    buffer::Buffer,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture, KeyCode},
        execute,
    },
    layout::{Constraint, Layout, Rect, Size},
    widgets::{Block, Widget},
    DefaultTerminal,
};
use thong_ratatui_extra::{extensions::RectExt, thematize::Thematize};
use tokio_util::sync::CancellationToken;

use crate::{
    chart::RenderEngine,
    events::{self, fetch::BarSource, AppEvent},
    pages::{chart_view::ChartView, footer::Footer, title::Title},
    theme::Theme,
    traits::Component,
    window::Window,
};

pub struct SharedState {
    pub theme: Theme,
    pub window: Window,
}

pub struct App<E: RenderEngine, S: BarSource> {
    exit: bool,
    chart_view: ChartView<E, S>,
    shared_state: SharedState,

    input_thread: Option<JoinHandle<()>>,
}

impl<E: RenderEngine, S: BarSource> App<E, S> {
    pub fn new(chart_view: ChartView<E, S>, theme: Theme) -> Self {
        Self {
            exit: false,
            chart_view,
            shared_state: SharedState {
                theme,
                window: Window::default(),
            },
            input_thread: None,
        }
    }

    pub async fn run(&mut self) -> crate::Result<()> {
        let (event_tr, event_rc) = mpsc::channel::<AppEvent>();
        let shutdown = CancellationToken::new();
        let mut terminal = ratatui::init();

        let result = match execute!(stdout(), EnableMouseCapture) {
            Ok(()) => {
                self.init_threads(&event_tr, &shutdown);
                self.event_loop(&mut terminal, &event_tr, &event_rc, &shutdown)
            }
            Err(e) => Err(crate::Error::Draw(e)),
        };

        // signal all the threads to exit
        shutdown.cancel();
        let exit_result = self.exit_threads().await;
        self.chart_view.unmount();

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result.and(exit_result)
    }

    fn event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        tr: &mpsc::Sender<AppEvent>,
        rc: &mpsc::Receiver<AppEvent>,
        sd: &CancellationToken,
    ) -> crate::Result<()> {
        let area = self.draw(terminal).map_err(crate::Error::Draw)?;
        self.shared_state
            .window
            .resize(Size::new(area.width, area.height))?;
        let body_area = self.body_area(area);
        self.chart_view.mount(body_area, tr, &self.shared_state)?;

        while !self.exit {
            let mut area = self.draw(terminal).map_err(crate::Error::Draw)?;

            let event = rc.recv()?;
            if let Some((width, height)) = event.resize() {
                area = Rect::new(0, 0, width, height);
                self.shared_state.window.resize(Size::new(width, height))?;
            }

            if let Err(e) = self.handle_event(event, area, tr, sd) {
                tracing::error!(error = %e, "event handling failed");
                self.chart_view.set_error(e.to_string());
            }
        }

        // final render before exiting
        self.draw(terminal).map_err(crate::Error::Draw)?;
        Ok(())
    }

    fn draw(&self, terminal: &mut DefaultTerminal) -> io::Result<Rect> {
        let completed_frame = terminal.draw(|frame| {
            frame.render_widget(self, frame.area());
        })?;
        Ok(completed_frame.area)
    }

    fn init_threads(&mut self, tr: &mpsc::Sender<AppEvent>, sd: &CancellationToken) {
        let tr_input = tr.clone();
        let shutdown_signal = sd.clone();
        self.input_thread = Some(std::thread::spawn(move || {
            events::input::watch_input_events(tr_input, shutdown_signal);
        }));
    }

    async fn exit_threads(&mut self) -> crate::Result<()> {
        if let Some(task) = self.chart_view.take_fetch_task() {
            task.cancel();
            let _ = task.thread.await;
        }

        if let Some(thread) = self.input_thread.take() {
            thread
                .join()
                .map_err(|_| crate::Error::InputThreadPanicked)?;
        }

        Ok(())
    }

    fn handle_event(
        &mut self,
        event: AppEvent,
        area: Rect,
        tr: &mpsc::Sender<AppEvent>,
        sd: &CancellationToken,
    ) -> crate::Result<()> {
        let body_area = self.body_area(area);
        let actions =
            self.chart_view
                .handle_event(&event, body_area, tr, sd, &self.shared_state)?;

        if event.is_ctrl_pressed('c') || (event.is_key_pressed(KeyCode::Esc) && !actions.ignore_esc)
        {
            self.exit = true;
        }

        Ok(())
    }

    fn get_areas(&self, area: Rect) -> [Rect; 3] {
        let [title_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);
        [title_area, body_area, footer_area]
    }

    /// Inside of the bordered body, where the chart view lives.
    fn body_area(&self, area: Rect) -> Rect {
        self.get_areas(area)[1].block_inner()
    }
}

impl<E: RenderEngine, S: BarSource> Widget for &App<E, S> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [title_area, body_area, footer_area] = self.get_areas(area);
        buf.set_style(area, self.shared_state.theme.style());

        Title.render_component(title_area, buf, &self.shared_state);

        Block::bordered()
            .style(self.shared_state.theme.style())
            .border_type(self.shared_state.theme.border_type())
            .render(body_area, buf);
        self.chart_view
            .render_component(body_area.block_inner(), buf, &self.shared_state);

        Footer { exit: self.exit }.render(footer_area, buf, &self.shared_state.theme);
    }
}
