use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};
use thong_ratatui_extra::{extensions::RectExt, thematize::Thematize};

use crate::theme::Theme;

pub const KEY_HINTS: &str =
    "[TAB] next field | [PgUp/PgDn] zoom | [Shift+←/→] pan | [Ctrl+R] fit | [Ctrl+C] or [ESC] quit";

pub struct Footer {
    pub exit: bool,
}

impl Footer {
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        buf.set_style(area, theme.style_dim());
        let footer_text = if self.exit {
            "exiting please wait..."
        } else {
            KEY_HINTS
        };
        Line::from(footer_text)
            .style(theme.style_dim())
            .render(area.margin_h(1), buf);
    }
}
