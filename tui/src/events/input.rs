use std::{sync::mpsc, time::Duration};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio_util::sync::CancellationToken;

use crate::events::AppEvent;

/// How long a poll waits before the shutdown signal is checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Forwards terminal input to the app until `shutdown_signal` is cancelled
/// or the app stops listening.
pub fn watch_input_events(tx: mpsc::Sender<AppEvent>, shutdown_signal: CancellationToken) {
    while !shutdown_signal.is_cancelled() {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::error!(error = %e, "polling terminal input failed");
                break;
            }
        }

        let event = match event::read() {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = %e, "reading terminal input failed");
                break;
            }
        };

        if !should_forward(&event) {
            continue;
        }
        if tx.send(AppEvent::Input(event)).is_err() {
            break;
        }
    }
}

/// Only key presses, mouse and resize events reach the app.
fn should_forward(event: &Event) -> bool {
    match event {
        Event::Key(key_event) => key_event.kind == KeyEventKind::Press,
        Event::Mouse(_) | Event::Resize(..) => true,
        _ => false,
    }
}
