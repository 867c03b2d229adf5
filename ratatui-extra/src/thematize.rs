use ratatui::{style::Style, widgets::BorderType};

pub trait Thematize {
    fn style(&self) -> Style;

    fn style_dim(&self) -> Style;

    /// Text and borders reporting a failure.
    fn error(&self) -> Style;

    fn cursor(&self) -> Style;

    fn border_type(&self) -> BorderType;

    fn button_focused(&self) -> Style;

    fn button_notfocused(&self) -> Style;

    fn boxed(&self) -> bool;
}
