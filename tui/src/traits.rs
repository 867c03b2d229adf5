use std::sync::mpsc;

use ratatui::{buffer::Buffer, layout::Rect};
use tokio_util::sync::CancellationToken;

use crate::{app::SharedState, events::AppEvent};

#[derive(Default, Debug, PartialEq, Eq)]
pub struct Actions {
    // Enable if the component wants to handle the [ESC] key.
    pub ignore_esc: bool,
}

impl Actions {
    pub fn ignore_esc(&mut self) {
        self.ignore_esc = true;
    }
}

pub trait Component {
    /// Handles an event and returns any actions to be performed.
    /// This cannot be async to prevent TUI render from blocking.
    fn handle_event(
        &mut self,
        event: &AppEvent,
        area: Rect,
        transmitter: &mpsc::Sender<AppEvent>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> crate::Result<Actions>;

    /// Renders the component into the given area and returns the area that was
    /// actually used.
    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized;
}
