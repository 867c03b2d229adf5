use ratatui::crossterm::event::{Event, KeyCode};
use thong_ratatui_extra::extensions::EventExt;
use thong_utils::stock::DailyBar;

pub mod fetch;
pub mod input;

/// What asked for a fetch, decides how its bars reach the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    /// Issued right after the chart was created.
    Mount,
    /// Issued by the Update Chart button.
    Submit,
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub origin: FetchOrigin,
    pub result: thong_utils::Result<Vec<DailyBar>>,
}

#[derive(Debug)]
pub enum AppEvent {
    Input(Event),
    BarsFetched(FetchOutcome),
}

impl AppEvent {
    pub fn input(&self) -> Option<&Event> {
        if let AppEvent::Input(event) = self {
            Some(event)
        } else {
            None
        }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.input().is_some_and(|event| event.is_key_pressed(key))
    }

    pub fn is_ctrl_pressed(&self, char: char) -> bool {
        self.input().is_some_and(|event| event.is_ctrl_pressed(char))
    }

    pub fn resize(&self) -> Option<(u16, u16)> {
        match self {
            AppEvent::Input(Event::Resize(width, height)) => Some((*width, *height)),
            _ => None,
        }
    }
}
