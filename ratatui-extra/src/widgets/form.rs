use std::{collections::HashSet, marker::PhantomData};

use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyModifiers},
    layout::Rect,
};
use strum::IntoEnumIterator;

use super::{
    button::{Button, ButtonResult, BUTTON_HEIGHT},
    input_box::{InputBox, INPUT_BOX_HEIGHT},
};
use crate::{
    extensions::{EventExt, MouseEventExt},
    thematize::Thematize,
};

/// Columns left between two items of a row.
const ITEM_GAP: u16 = 1;

pub trait FormItemIndex {
    fn index(self) -> usize;
}

#[derive(Clone, Debug)]
pub enum FormWidget {
    InputBox { widget: InputBox },
    Button { widget: Button },
}

impl FormWidget {
    pub fn label(&self) -> &'static str {
        match self {
            FormWidget::InputBox { widget } => widget.label(),
            FormWidget::Button { widget } => widget.label(),
        }
    }

    pub fn width(&self) -> u16 {
        match self {
            FormWidget::InputBox { widget } => widget.width(),
            FormWidget::Button { widget } => widget.width(),
        }
    }

    pub fn height(&self) -> u16 {
        match self {
            FormWidget::InputBox { .. } => INPUT_BOX_HEIGHT,
            FormWidget::Button { .. } => BUTTON_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent<T> {
    ValueChanged(T),
    ButtonPressed(T),
}

/// Items laid out left to right on a single row.
#[derive(Debug)]
pub struct Form<
    T: IntoEnumIterator + ToString + FormItemIndex + TryInto<FormWidget, Error = E>,
    E: From<crate::error::RatatuiExtraError>,
> {
    cursor: usize,
    form_focus: bool,
    items: Vec<FormWidget>,
    hide: HashSet<usize>,
    _phantom: PhantomData<T>,
}

impl<
        T: IntoEnumIterator + ToString + FormItemIndex + TryInto<FormWidget, Error = E>,
        E: From<crate::error::RatatuiExtraError>,
    > Form<T, E>
{
    pub fn init<F>(set_values_closure: F) -> Result<Self, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        let mut form = Self {
            cursor: 0,
            form_focus: true,
            items: T::iter()
                .map(|item| item.try_into())
                .collect::<Result<Vec<FormWidget>, _>>()?,
            hide: HashSet::new(),
            _phantom: PhantomData,
        };
        set_values_closure(&mut form)?;
        form.ensure_valid_cursor();

        Ok(form)
    }

    pub fn set_form_focus(&mut self, focus: bool) {
        self.form_focus = focus;
    }

    pub fn is_form_focused(&self) -> bool {
        self.form_focus
    }

    pub fn hide_item(&mut self, idx: T) {
        self.hide.insert(idx.index());
        self.ensure_valid_cursor();
    }

    pub fn show_item(&mut self, idx: T) {
        self.hide.remove(&idx.index());
    }

    pub fn hidden_count(&self) -> usize {
        self.hide.len()
    }

    pub fn visible_count(&self) -> usize {
        self.items.len() - self.hidden_count()
    }

    pub fn advance_cursor(&mut self) {
        for _ in 0..self.items.len() {
            self.cursor = (self.cursor + 1) % self.items.len();
            if self.is_valid_cursor(self.cursor) {
                break;
            }
        }
    }

    pub fn retreat_cursor(&mut self) {
        for _ in 0..self.items.len() {
            self.cursor = (self.cursor + self.items.len() - 1) % self.items.len();
            if self.is_valid_cursor(self.cursor) {
                break;
            }
        }
    }

    fn ensure_valid_cursor(&mut self) {
        if !self.items.is_empty() && !self.is_valid_cursor(self.cursor) {
            self.advance_cursor();
        }
    }

    pub fn is_valid_cursor(&self, idx: usize) -> bool {
        idx < self.items.len() && !self.hide.contains(&idx)
    }

    pub fn focus(&mut self, idx: T) {
        let idx = idx.index();
        if self.is_valid_cursor(idx) {
            self.cursor = idx;
        }
    }

    pub fn is_focused(&self, idx: T) -> bool {
        self.cursor == idx.index()
    }

    pub fn is_button_focused(&self) -> bool {
        matches!(self.items.get(self.cursor), Some(FormWidget::Button { .. }))
    }

    fn input(&self, idx: T) -> Result<&InputBox, E> {
        let label = idx.to_string();
        match self.items.get(idx.index()) {
            Some(FormWidget::InputBox { widget }) => Ok(widget),
            _ => Err(crate::error::RatatuiExtraError::FormItemNotInput { label }.into()),
        }
    }

    fn input_mut(&mut self, idx: T) -> Result<&mut InputBox, E> {
        let label = idx.to_string();
        match self.items.get_mut(idx.index()) {
            Some(FormWidget::InputBox { widget }) => Ok(widget),
            _ => Err(crate::error::RatatuiExtraError::FormItemNotInput { label }.into()),
        }
    }

    pub fn get_text(&self, idx: T) -> Result<&str, E> {
        Ok(self.input(idx)?.get_text())
    }

    pub fn set_text(&mut self, idx: T, text: String) -> Result<(), E> {
        self.input_mut(idx)?.set_text(text);
        Ok(())
    }

    pub fn set_invalid(&mut self, idx: T, invalid: bool) -> Result<(), E> {
        self.input_mut(idx)?.set_invalid(invalid);
        Ok(())
    }

    pub fn is_invalid(&self, idx: T) -> Result<bool, E> {
        Ok(self.input(idx)?.is_invalid())
    }

    pub fn current_label_enum(&self) -> Result<T, E> {
        Self::label_enum(self.cursor)
    }

    fn label_enum(idx: usize) -> Result<T, E> {
        T::iter().nth(idx).ok_or_else(|| {
            crate::error::RatatuiExtraError::FormLabelNotAvailable {
                cursor: idx,
                available: T::iter().map(|t| t.to_string()).collect(),
            }
            .into()
        })
    }

    pub fn height(&self) -> u16 {
        self.items
            .iter()
            .map(FormWidget::height)
            .max()
            .unwrap_or(0)
    }

    /// Area of every item, hidden items get an empty area.
    pub fn layout(&self, area: Rect) -> Vec<Rect> {
        let mut x = area.x;
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                if self.hide.contains(&idx) {
                    return Rect::default();
                }
                let item_area = Rect {
                    x,
                    y: area.y,
                    width: item.width(),
                    height: item.height(),
                }
                .intersection(area);
                x = x.saturating_add(item.width() + ITEM_GAP);
                item_area
            })
            .collect()
    }

    pub fn handle_event(
        &mut self,
        event: Option<&Event>,
        area: Rect,
    ) -> Result<Option<FormEvent<T>>, E> {
        let Some(event) = event else {
            return Ok(None);
        };
        if self.items.is_empty() {
            return Ok(None);
        }
        let areas = self.layout(area);

        if let Some(mouse_event) = event.mouse_event() {
            if !mouse_event.is_left_click() {
                return Ok(None);
            }
            let Some(idx) = areas
                .iter()
                .position(|item_area| item_area.contains(mouse_event.position()))
            else {
                return Ok(None);
            };
            self.cursor = idx;
            return self.forward(idx, event, areas[idx]);
        }

        if !self.form_focus {
            return Ok(None);
        }

        if let Some(key_event) = event.key_event() {
            match key_event.code {
                KeyCode::Tab => {
                    self.advance_cursor();
                    return Ok(None);
                }
                KeyCode::BackTab => {
                    self.retreat_cursor();
                    return Ok(None);
                }
                KeyCode::Enter
                    if key_event.modifiers == KeyModifiers::NONE && !self.is_button_focused() =>
                {
                    self.advance_cursor();
                    return Ok(None);
                }
                _ => {}
            }
        }

        self.forward(self.cursor, event, areas[self.cursor])
    }

    fn forward(
        &mut self,
        idx: usize,
        event: &Event,
        area: Rect,
    ) -> Result<Option<FormEvent<T>>, E> {
        let focus = self.cursor == idx;
        match &mut self.items[idx] {
            FormWidget::InputBox { widget } => {
                if widget.handle_event(Some(event), area) {
                    return Ok(Some(FormEvent::ValueChanged(Self::label_enum(idx)?)));
                }
            }
            FormWidget::Button { widget } => {
                if let Some(ButtonResult::Pressed) = widget.handle_event(Some(event), area, focus) {
                    return Ok(Some(FormEvent::ButtonPressed(Self::label_enum(idx)?)));
                }
            }
        }
        Ok(None)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize)
    where
        Self: Sized,
    {
        for (idx, (item, item_area)) in self.items.iter().zip(self.layout(area)).enumerate() {
            if item_area.is_empty() {
                continue;
            }
            let focus = self.form_focus && self.cursor == idx;
            match item {
                FormWidget::InputBox { widget } => widget.render(item_area, buf, focus, theme),
                FormWidget::Button { widget } => widget.render(item_area, buf, focus, theme),
            }
        }
    }
}
