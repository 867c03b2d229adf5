use ratatui::{
    crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    layout::{Position, Rect},
};

pub trait RectExt {
    fn change_height(self, new_height: u16) -> Rect;

    fn change_width(self, new_width: u16) -> Rect;

    fn margin_h(self, m: u16) -> Rect;

    fn margin_top(self, m: u16) -> Rect;

    fn block_inner(self) -> Rect;
}

impl RectExt for Rect {
    fn change_height(self, new_height: u16) -> Rect {
        Rect {
            height: new_height,
            ..self
        }
    }

    fn change_width(self, new_width: u16) -> Rect {
        Rect {
            width: new_width,
            ..self
        }
    }

    fn margin_h(self, x: u16) -> Rect {
        Rect {
            x: self.x.saturating_add(x),
            y: self.y,
            width: self.width.saturating_sub(2 * x),
            height: self.height,
        }
    }

    fn margin_top(self, m: u16) -> Rect {
        Rect {
            x: self.x,
            y: self.y.saturating_add(m),
            width: self.width,
            height: self.height.saturating_sub(m),
        }
    }

    fn block_inner(self) -> Rect {
        Rect {
            x: self.x.saturating_add(1),
            y: self.y.saturating_add(1),
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }
}

pub trait EventExt {
    fn key_event(&self) -> Option<&KeyEvent>;

    fn mouse_event(&self) -> Option<&MouseEvent>;

    fn is_key_pressed(&self, key: KeyCode) -> bool;

    fn is_ctrl_pressed(&self, char: char) -> bool;
}

impl EventExt for Event {
    fn key_event(&self) -> Option<&KeyEvent> {
        if let Event::Key(key_event) = self {
            Some(key_event)
        } else {
            None
        }
    }

    fn mouse_event(&self) -> Option<&MouseEvent> {
        if let Event::Mouse(mouse_event) = self {
            Some(mouse_event)
        } else {
            None
        }
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.key_event().is_some_and(|ke| ke.is_pressed(key))
    }

    fn is_ctrl_pressed(&self, char: char) -> bool {
        self.key_event().is_some_and(|ke| {
            ke.kind == KeyEventKind::Press
                && ke.code == KeyCode::Char(char)
                && ke.modifiers == KeyModifiers::CONTROL
        })
    }
}

pub trait KeyEventExt {
    /// Pressed without any modifier.
    fn is_pressed(&self, key: KeyCode) -> bool;
}

impl KeyEventExt for KeyEvent {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.kind == KeyEventKind::Press && self.code == key && self.modifiers == KeyModifiers::NONE
    }
}

pub trait MouseEventExt {
    fn is_left_click(&self) -> bool;

    fn position(&self) -> Position;
}

impl MouseEventExt for MouseEvent {
    #[inline]
    fn is_left_click(&self) -> bool {
        matches!(self.kind, MouseEventKind::Down(MouseButton::Left))
    }

    #[inline]
    fn position(&self) -> Position {
        Position {
            x: self.column,
            y: self.row,
        }
    }
}
