use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyModifiers},
    layout::{Position, Rect},
    style::Stylize,
    text::Span,
    widgets::{Block, Widget},
};

use crate::{
    extensions::{MouseEventExt, RectExt},
    thematize::Thematize,
};

pub const INPUT_BOX_HEIGHT: u16 = 3;

fn option_delete(text_input: &mut String, text_cursor: &mut usize) {
    loop {
        if *text_cursor == 0 {
            break;
        }
        text_input.remove(*text_cursor - 1);
        *text_cursor -= 1;
        if *text_cursor == 0 {
            break;
        }
        let next_char = text_input.chars().nth(*text_cursor - 1).unwrap_or(' ');
        if next_char == ' ' || next_char == '-' {
            break;
        }
    }
}

fn option_left(text_input: &str, text_cursor: &mut usize) {
    loop {
        if *text_cursor == 0 {
            break;
        }
        *text_cursor -= 1;
        let cur_char = text_input.chars().nth(*text_cursor).unwrap_or(' ');
        if cur_char == ' ' || cur_char == '-' {
            break;
        }
    }
}

fn option_right(text_input: &str, text_cursor: &mut usize) {
    loop {
        if *text_cursor == text_input.len() {
            break;
        }
        *text_cursor += 1;
        let cur_char = text_input.chars().nth(*text_cursor).unwrap_or(' ');
        if cur_char == ' ' || cur_char == '-' {
            break;
        }
    }
}

/// Single line text input. Only printable ASCII is accepted so byte and
/// character positions are the same.
#[derive(Debug, Clone)]
pub struct InputBox {
    label: &'static str,
    text_input: String,
    text_cursor: usize,
    empty_text: Option<&'static str>,
    width: u16,
    invalid: bool,
    uppercase: bool,
}

impl InputBox {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            text_input: String::new(),
            text_cursor: 0,
            empty_text: None,
            width: 20,
            invalid: false,
            uppercase: false,
        }
    }

    pub fn with_empty_text(mut self, empty_text: &'static str) -> Self {
        self.empty_text = Some(empty_text);
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Letters are stored upper-cased, both typed and set.
    pub fn with_uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn get_text(&self) -> &str {
        &self.text_input
    }

    pub fn set_text(&mut self, text: String) {
        self.text_input = text
            .chars()
            .filter(|c| c.is_ascii() && !c.is_ascii_control())
            .map(|c| self.case(c))
            .collect();
        self.text_cursor = self.text_input.len();
    }

    pub fn cursor(&self) -> usize {
        self.text_cursor
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Returns `true` when the text was changed by the event.
    pub fn handle_event(&mut self, event: Option<&Event>, area: Rect) -> bool {
        let before = self.text_input.clone();

        match event {
            Some(Event::Key(key_event)) => match key_event.code {
                KeyCode::Left => {
                    if key_event.modifiers == KeyModifiers::ALT {
                        option_left(&self.text_input, &mut self.text_cursor);
                    } else if self.text_cursor > 0 {
                        self.text_cursor -= 1;
                    }
                }
                KeyCode::Right => {
                    if key_event.modifiers == KeyModifiers::ALT {
                        option_right(&self.text_input, &mut self.text_cursor);
                    } else if self.text_cursor < self.text_input.len() {
                        self.text_cursor += 1;
                    }
                }
                KeyCode::Home => self.text_cursor = 0,
                KeyCode::End => self.text_cursor = self.text_input.len(),
                KeyCode::Char(char) => {
                    // Handle command + delete on macOS
                    if char == 'u' && key_event.modifiers == KeyModifiers::CONTROL {
                        let (_, right) = self.text_input.split_at(self.text_cursor);
                        self.text_input = right.to_string();
                        self.text_cursor = 0;
                    }
                    // Handle command + left on macOS
                    else if char == 'a' && key_event.modifiers == KeyModifiers::CONTROL {
                        self.text_cursor = 0;
                    }
                    // Handle command + right on macOS
                    else if char == 'e' && key_event.modifiers == KeyModifiers::CONTROL {
                        self.text_cursor = self.text_input.len();
                    }
                    // Handle option + delete on macOS
                    else if char == 'w' && key_event.modifiers == KeyModifiers::CONTROL {
                        option_delete(&mut self.text_input, &mut self.text_cursor);
                    }
                    // option + Left
                    else if char == 'b' && key_event.modifiers == KeyModifiers::ALT {
                        option_left(&self.text_input, &mut self.text_cursor);
                    }
                    // option + Right
                    else if char == 'f' && key_event.modifiers == KeyModifiers::ALT {
                        option_right(&self.text_input, &mut self.text_cursor);
                    }
                    // Simple char press, leading spaces are ignored
                    else if !(self.text_input.is_empty() && char == ' ')
                        && (key_event.modifiers == KeyModifiers::NONE
                        || key_event.modifiers == KeyModifiers::SHIFT)
                        && char.is_ascii()
                        && !char.is_ascii_control()
                    {
                        let char = self.case(char);
                        self.text_input.insert(self.text_cursor, char);
                        self.text_cursor += 1;
                    }
                }
                KeyCode::Backspace => {
                    if key_event.modifiers == KeyModifiers::ALT {
                        option_delete(&mut self.text_input, &mut self.text_cursor);
                    } else if self.text_cursor > 0 {
                        self.text_cursor -= 1;
                        self.text_input.remove(self.text_cursor);
                    }
                }
                KeyCode::Delete => {
                    if self.text_cursor < self.text_input.len() {
                        self.text_input.remove(self.text_cursor);
                    }
                }
                _ => {}
            },
            Some(Event::Mouse(mouse_event)) => {
                if mouse_event.is_left_click() {
                    let inner = Self::text_area(area);
                    if inner.contains(mouse_event.position()) {
                        let relative_x = mouse_event.column.saturating_sub(inner.x) as usize;
                        let scroll = self.scroll(inner.width as usize);
                        self.text_cursor = (scroll + relative_x).min(self.text_input.len());
                    }
                }
            }
            _ => {}
        }

        before != self.text_input
    }

    fn case(&self, c: char) -> char {
        if self.uppercase {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    fn text_area(area: Rect) -> Rect {
        area.change_height(INPUT_BOX_HEIGHT.min(area.height))
            .block_inner()
            .margin_h(1)
    }

    /// First visible character so the cursor stays on screen.
    fn scroll(&self, visible: usize) -> usize {
        if visible == 0 || self.text_cursor < visible {
            0
        } else {
            self.text_cursor + 1 - visible
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, focus: bool, theme: &impl Thematize)
    where
        Self: Sized,
    {
        let area_used = area.change_height(INPUT_BOX_HEIGHT.min(area.height));
        let border_style = if self.invalid {
            theme.error()
        } else if focus {
            theme.style()
        } else {
            theme.style_dim()
        };

        if theme.boxed() {
            Block::bordered()
                .border_type(theme.border_type())
                .style(border_style)
                .title(self.label)
                .render(area_used, buf);
        } else {
            Span::raw(self.label)
                .style(border_style)
                .render(area_used, buf);
            Span::raw(">")
                .style(if focus {
                    theme.style().bold()
                } else {
                    theme.style_dim()
                })
                .render(area_used.margin_top(1), buf);
        }
        let inner_area = Self::text_area(area);
        let visible = inner_area.width as usize;
        let scroll = self.scroll(visible);

        let shown = self
            .text_input
            .get(scroll..(scroll + visible).min(self.text_input.len()))
            .unwrap_or_default();
        Span::raw(shown)
            .style(if focus {
                theme.style()
            } else {
                theme.style_dim()
            })
            .render(inner_area, buf);

        if self.text_input.is_empty() {
            if let Some(empty_text) = self.empty_text {
                Span::raw(empty_text)
                    .style(theme.style_dim())
                    .render(inner_area, buf);
            }
        }

        if focus && !inner_area.is_empty() {
            let cx = inner_area.x + (self.text_cursor - scroll) as u16;
            let Some(cell) = buf.cell_mut(Position::new(cx, inner_area.y)) else {
                return;
            };

            if cell.symbol().is_empty() {
                cell.set_symbol(" ");
            }

            cell.set_style(theme.cursor());
        }
    }
}
