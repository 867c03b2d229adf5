use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode},
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

use crate::{
    extensions::{KeyEventExt, MouseEventExt, RectExt},
    thematize::Thematize,
};

pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonResult {
    Pressed,
}

#[derive(Debug, Clone)]
pub struct Button {
    label: &'static str,
}

impl Button {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn width(&self) -> u16 {
        (self.label.len() + 4) as u16
    }

    /// Enter presses a focused button, a left click presses it regardless.
    pub fn handle_event(
        &self,
        event: Option<&Event>,
        area: Rect,
        focus: bool,
    ) -> Option<ButtonResult> {
        match event? {
            Event::Key(key_event) => {
                (focus && key_event.is_pressed(KeyCode::Enter)).then_some(ButtonResult::Pressed)
            }
            Event::Mouse(mouse_event) => (mouse_event.is_left_click()
                && self.area(area).contains(mouse_event.position()))
            .then_some(ButtonResult::Pressed),
            _ => None,
        }
    }

    pub fn area(&self, area: Rect) -> Rect {
        area.intersection(Rect {
            width: self.width(),
            height: BUTTON_HEIGHT,
            x: area.x,
            y: area.y,
        })
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, focus: bool, theme: &impl Thematize)
    where
        Self: Sized,
    {
        let button_area = self.area(area);
        let style = if focus {
            theme.button_focused()
        } else {
            theme.button_notfocused()
        };

        if theme.boxed() {
            Block::bordered()
                .border_type(theme.border_type())
                .style(if focus { style } else { Style::default() })
                .render(button_area, buf);
        } else {
            Block::default().style(style).render(button_area, buf);
        }

        Line::from(self.label)
            .style(style)
            .render(button_area.block_inner().margin_h(1), buf);
    }
}
