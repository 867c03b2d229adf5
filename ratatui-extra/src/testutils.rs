//! Test utilities for TUI component testing.
//!
//! Provides a test terminal with fixed dimensions to render components
//! and compare the actual rendered text output.

use ratatui::{
    buffer::Buffer,
    crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::BorderType,
};

use crate::thematize::Thematize;

/// A fixed-size test terminal for rendering components and comparing output.
pub struct TestTerminal {
    pub buffer: Buffer,
    pub area: Rect,
}

impl TestTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let buffer = Buffer::empty(area);
        Self { buffer, area }
    }

    /// Each row is a line with trailing spaces removed, trailing empty rows
    /// are dropped.
    pub fn render_to_string(&self) -> String {
        let mut lines = Vec::new();
        for y in 0..self.area.height {
            let mut line = String::new();
            for x in 0..self.area.width {
                let symbol = self
                    .buffer
                    .cell(Position::new(x, y))
                    .map(|cell| cell.symbol())
                    .unwrap_or(" ");
                if symbol.is_empty() {
                    line.push(' ');
                } else {
                    line.push_str(symbol);
                }
            }
            lines.push(line.trim_end().to_string());
        }
        while lines.last().map(|l| l.is_empty()).unwrap_or(false) {
            lines.pop();
        }
        lines.join("\n")
    }

    pub fn symbol_at(&self, x: u16, y: u16) -> &str {
        self.buffer
            .cell(Position::new(x, y))
            .map(|cell| cell.symbol())
            .unwrap_or("")
    }

    pub fn style_at(&self, x: u16, y: u16) -> Style {
        self.buffer
            .cell(Position::new(x, y))
            .map(|cell| cell.style())
            .unwrap_or_default()
    }

    /// Find the cursor position (x, y) and return the character at that position.
    pub fn find_cursor(&self) -> Option<(u16, u16, char)> {
        for y in 0..self.area.height {
            for x in 0..self.area.width {
                if let Some(cell) = self.buffer.cell(Position::new(x, y)) {
                    if cell.style().add_modifier.contains(Modifier::REVERSED) {
                        let ch = cell.symbol().chars().next().unwrap_or(' ');
                        return Some((x, y, ch));
                    }
                }
            }
        }
        None
    }
}

/// A simple theme for testing with predictable styling.
#[derive(Default, Clone)]
pub struct TestTheme {
    pub boxed: bool,
}

impl TestTheme {
    pub fn boxed() -> Self {
        Self { boxed: true }
    }

    pub fn unboxed() -> Self {
        Self { boxed: false }
    }
}

impl Thematize for TestTheme {
    fn style(&self) -> Style {
        Style::default()
    }

    fn style_dim(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    fn error(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    fn cursor(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    fn border_type(&self) -> BorderType {
        BorderType::Plain
    }

    fn button_focused(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    fn button_notfocused(&self) -> Style {
        Style::default()
    }

    fn boxed(&self) -> bool {
        self.boxed
    }
}

// ============================================================================
// Event helpers for simulating keyboard and mouse input
// ============================================================================

pub fn key_code(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

pub fn key(c: char) -> Event {
    key_code(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn key_ctrl(c: char) -> Event {
    key_code(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn key_alt(c: char) -> Event {
    key_code(KeyCode::Char(c), KeyModifiers::ALT)
}

pub fn backspace() -> Event {
    key_code(KeyCode::Backspace, KeyModifiers::NONE)
}

pub fn backspace_alt() -> Event {
    key_code(KeyCode::Backspace, KeyModifiers::ALT)
}

pub fn left() -> Event {
    key_code(KeyCode::Left, KeyModifiers::NONE)
}

pub fn right() -> Event {
    key_code(KeyCode::Right, KeyModifiers::NONE)
}

pub fn enter() -> Event {
    key_code(KeyCode::Enter, KeyModifiers::NONE)
}

pub fn tab() -> Event {
    key_code(KeyCode::Tab, KeyModifiers::NONE)
}

pub fn back_tab() -> Event {
    key_code(KeyCode::BackTab, KeyModifiers::SHIFT)
}

pub fn mouse_click(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn mouse_move(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

/// Types every character of `text` into `apply`.
pub fn type_text(text: &str, mut apply: impl FnMut(&Event)) {
    for c in text.chars() {
        apply(&key(c));
    }
}
