use std::sync::mpsc;

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};
use thong_ratatui_extra::{extensions::RectExt, thematize::Thematize};
use tokio_util::sync::CancellationToken;

use crate::{
    app::SharedState,
    events::AppEvent,
    traits::{Actions, Component},
};

pub struct Title;

impl Component for Title {
    fn handle_event(
        &mut self,
        _event: &AppEvent,
        _area: Rect,
        _transmitter: &mpsc::Sender<AppEvent>,
        _shutdown_signal: &CancellationToken,
        _shared_state: &SharedState,
    ) -> crate::Result<Actions> {
        Ok(Actions::default())
    }

    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized,
    {
        buf.set_style(area, shared_state.theme.style_dim());
        let area = area.margin_h(1);

        Line::from("Thong Chart")
            .style(shared_state.theme.style())
            .render(area, buf);

        Line::from(format!("v{}", env!("CARGO_PKG_VERSION")))
            .style(shared_state.theme.style_dim())
            .right_aligned()
            .render(area, buf);

        area
    }
}
