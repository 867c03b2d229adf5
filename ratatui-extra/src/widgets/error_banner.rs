use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Widget},
};

use crate::{extensions::RectExt, thematize::Thematize};

/// Bordered, word-wrapped message shown inline above the content it
/// refers to.
#[derive(Debug)]
pub struct ErrorBanner<'a> {
    title: &'static str,
    message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            title: "Error",
            message,
        }
    }

    pub fn with_title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    fn lines(&self, width: u16) -> Vec<String> {
        let text_width = width.saturating_sub(4).max(1) as usize;
        textwrap::wrap(self.message, text_width)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    /// Rows needed to show the whole message at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        self.lines(width).len().max(1) as u16 + 2
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        let area = area.change_height(self.height(area.width).min(area.height));
        Block::bordered()
            .border_type(theme.border_type())
            .title(self.title)
            .style(theme.error())
            .render(area, buf);

        Text::from(
            self.lines(area.width)
                .into_iter()
                .map(Line::from)
                .collect::<Vec<_>>(),
        )
        .style(theme.error())
        .render(area.block_inner().margin_h(1), buf);
    }
}
