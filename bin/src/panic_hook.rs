use std::io::stdout;

use ratatui::crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Sets a panic hook that gives the terminal back before printing the panic.
pub fn set() {
    std::panic::set_hook(Box::new(|info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);

        let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            info.to_string()
        };

        if let Some(loc) = info.location() {
            eprintln!("Panic: {msg:?} at {}:{}", loc.file(), loc.line());
        } else {
            eprintln!("Panic: {msg:?}");
        }
        tracing::error!(%msg, "panicked");

        eprintln!(
            "This is a bug! Please report it at {}/issues/new",
            env!("CARGO_PKG_REPOSITORY")
        );
    }));
}
