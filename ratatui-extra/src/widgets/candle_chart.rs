use chrono::{DateTime, Datelike, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Widest bar spacing reachable by zooming in.
pub const MAX_BAR_SPACING: u16 = 8;
/// Widest bar spacing used when fitting a small dataset.
const FIT_MAX_BAR_SPACING: u16 = 5;
const PRICE_LABEL_EVERY: u16 = 4;
/// Bodies thinner than this (in rows) are widened so flat days stay visible.
const MIN_BODY: f64 = 0.5;
/// Share of a half cell a body or wick must cover to be drawn there.
const MIN_COVER: f64 = 0.1;

/// One candle in the chart's own format, `time` is unix seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CandlePoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandlePoint {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }

    pub fn calc_y(&self, y_scale: f64, g_min: f64) -> [f64; 4] {
        [self.open, self.high, self.low, self.close].map(|v| (v - g_min) / y_scale)
    }

    pub fn is_bullish(&self) -> bool {
        self.open <= self.close
    }

    /// Extends this candle by a later one covering the following interval.
    pub fn merge(&mut self, next: &CandlePoint) {
        self.high = self.high.max(next.high);
        self.low = self.low.min(next.low);
        self.close = next.close;
    }

    pub fn date(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp(self.time, 0).map(|dt| dt.date_naive())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    pub background: Color,
    pub text: Color,
    pub grid: Color,
    pub border: Color,
    pub crosshair: bool,
    pub time_axis_visible: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Reset,
            grid: Color::DarkGray,
            border: Color::DarkGray,
            crosshair: true,
            time_axis_visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub up: Color,
    pub down: Color,
    pub wick_up: Color,
    pub wick_down: Color,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            up: Color::LightGreen,
            down: Color::Red,
            wick_up: Color::LightGreen,
            wick_down: Color::Red,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    /// Every point on screen, merging neighbours when there are more points
    /// than columns.
    #[default]
    Fit,
    /// A fixed spacing window, `right_offset` points are hidden on the right.
    Window { bar_spacing: u16, right_offset: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartLayout {
    pub area: Rect,
    pub plot: Rect,
    pub price_axis: Rect,
    pub time_axis: Option<Rect>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct VisibleRange {
    spacing: u16,
    chunk: usize,
    start: usize,
    end: usize,
}

impl VisibleRange {
    fn count(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Clone, Debug)]
pub struct CandleChart {
    points: Vec<CandlePoint>,
    width: u16,
    height: u16,
    chart_style: ChartStyle,
    series_style: SeriesStyle,
    viewport: Viewport,
    crosshair: Option<Position>,
    y_axis_width: u16,
}

impl CandleChart {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            points: Vec::new(),
            width,
            height,
            chart_style: ChartStyle::default(),
            series_style: SeriesStyle::default(),
            viewport: Viewport::Fit,
            crosshair: None,
            y_axis_width: y_axis_width(0.0, 0.0),
        }
    }

    pub fn with_chart_style(mut self, chart_style: ChartStyle) -> Self {
        self.chart_style = chart_style;
        self
    }

    pub fn set_series_style(&mut self, series_style: SeriesStyle) {
        self.series_style = series_style;
    }

    pub fn chart_style(&self) -> &ChartStyle {
        &self.chart_style
    }

    pub fn series_style(&self) -> &SeriesStyle {
        &self.series_style
    }

    /// Replaces the whole dataset, points are kept in ascending time order.
    pub fn set_data(&mut self, mut points: Vec<CandlePoint>) {
        points.sort_by_key(|point| point.time);

        let g_max = points.iter().map(|c| c.high).reduce(f64::max).unwrap_or(0.0);
        let g_min = points.iter().map(|c| c.low).reduce(f64::min).unwrap_or(0.0);
        self.y_axis_width = y_axis_width(g_max, g_min);

        self.points = points;
        self.clamp_viewport();
    }

    pub fn points(&self) -> &[CandlePoint] {
        &self.points
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp_viewport();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn fit_content(&mut self) {
        self.viewport = Viewport::Fit;
    }

    pub fn zoom_in(&mut self) {
        self.viewport = match self.viewport {
            Viewport::Fit => {
                let range = self.visible_range(self.plot_width());
                Viewport::Window {
                    bar_spacing: if range.chunk > 1 {
                        1
                    } else {
                        (range.spacing + 1).min(MAX_BAR_SPACING)
                    },
                    right_offset: 0,
                }
            }
            Viewport::Window {
                bar_spacing,
                right_offset,
            } => Viewport::Window {
                bar_spacing: (bar_spacing + 1).min(MAX_BAR_SPACING),
                right_offset,
            },
        };
        self.clamp_viewport();
    }

    pub fn zoom_out(&mut self) {
        if let Viewport::Window {
            bar_spacing,
            right_offset,
        } = self.viewport
        {
            self.viewport = if bar_spacing <= 1 {
                Viewport::Fit
            } else {
                Viewport::Window {
                    bar_spacing: bar_spacing - 1,
                    right_offset,
                }
            };
            self.clamp_viewport();
        }
    }

    /// Moves the view `bars` points back in time.
    pub fn scroll_left(&mut self, bars: usize) {
        let (bar_spacing, right_offset) = self.window_or_current();
        self.viewport = Viewport::Window {
            bar_spacing,
            right_offset: right_offset.saturating_add(bars),
        };
        self.clamp_viewport();
    }

    /// Moves the view `bars` points forward in time.
    pub fn scroll_right(&mut self, bars: usize) {
        if let Viewport::Window {
            bar_spacing,
            right_offset,
        } = self.viewport
        {
            self.viewport = Viewport::Window {
                bar_spacing,
                right_offset: right_offset.saturating_sub(bars),
            };
        }
    }

    /// Crosshair position relative to the chart's top left corner.
    pub fn set_crosshair(&mut self, position: Option<Position>) {
        self.crosshair = position;
    }

    pub fn crosshair(&self) -> Option<Position> {
        self.crosshair
    }

    /// The candle under the crosshair, merged if the view merges points.
    pub fn hovered(&self) -> Option<CandlePoint> {
        let position = self.crosshair?;
        let layout = self.layout(Rect::new(0, 0, self.width, self.height));
        if !layout.plot.contains(position) {
            return None;
        }
        self.candle_at(layout.plot, position.x)
    }

    /// The candles currently on screen, one per drawn column.
    pub fn visible_candles(&self) -> Vec<CandlePoint> {
        self.candles_in(&self.visible_range(self.plot_width()))
    }

    /// Time of the first and the last point covered by the view.
    pub fn visible_time_range(&self) -> Option<(i64, i64)> {
        let range = self.visible_range(self.plot_width());
        if range.count() == 0 {
            return None;
        }
        Some((self.points[range.start].time, self.points[range.end - 1].time))
    }

    pub fn layout(&self, area: Rect) -> ChartLayout {
        let area = Rect {
            x: area.x,
            y: area.y,
            width: area.width.min(self.width),
            height: area.height.min(self.height),
        };
        let axis_rows = if self.chart_style.time_axis_visible {
            2
        } else {
            0
        };
        let plot = Rect {
            x: area.x,
            y: area.y,
            width: area.width.saturating_sub(self.y_axis_width),
            height: area.height.saturating_sub(axis_rows),
        };
        let price_axis = Rect {
            x: plot.right(),
            y: area.y,
            width: area.width - plot.width,
            height: plot.height,
        };
        let time_axis = self.chart_style.time_axis_visible.then_some(Rect {
            x: area.x,
            y: plot.bottom(),
            width: area.width,
            height: area.height - plot.height,
        });
        ChartLayout {
            area,
            plot,
            price_axis,
            time_axis,
        }
    }

    fn plot_width(&self) -> u16 {
        self.width.saturating_sub(self.y_axis_width)
    }

    fn window_or_current(&self) -> (u16, usize) {
        match self.viewport {
            Viewport::Window {
                bar_spacing,
                right_offset,
            } => (bar_spacing, right_offset),
            Viewport::Fit => {
                let range = self.visible_range(self.plot_width());
                (if range.chunk > 1 { 1 } else { range.spacing }, 0)
            }
        }
    }

    fn clamp_viewport(&mut self) {
        if let Viewport::Window {
            bar_spacing,
            right_offset,
        } = self.viewport
        {
            let bar_spacing = bar_spacing.clamp(1, MAX_BAR_SPACING);
            let count = (self.plot_width() / bar_spacing).max(1) as usize;
            let max_offset = self.points.len().saturating_sub(count);
            self.viewport = Viewport::Window {
                bar_spacing,
                right_offset: right_offset.min(max_offset),
            };
        }
    }

    fn visible_range(&self, plot_width: u16) -> VisibleRange {
        let n = self.points.len();
        let plot_width = plot_width.max(1);
        match self.viewport {
            Viewport::Fit if n <= plot_width as usize => VisibleRange {
                spacing: (plot_width as usize / n.max(1)).clamp(1, FIT_MAX_BAR_SPACING as usize)
                    as u16,
                chunk: 1,
                start: 0,
                end: n,
            },
            Viewport::Fit => VisibleRange {
                spacing: 1,
                chunk: n.div_ceil(plot_width as usize),
                start: 0,
                end: n,
            },
            Viewport::Window {
                bar_spacing,
                right_offset,
            } => {
                let bar_spacing = bar_spacing.max(1);
                let count = (plot_width / bar_spacing).max(1) as usize;
                let end = n.saturating_sub(right_offset);
                VisibleRange {
                    spacing: bar_spacing,
                    chunk: 1,
                    start: end.saturating_sub(count),
                    end,
                }
            }
        }
    }

    fn candles_in(&self, range: &VisibleRange) -> Vec<CandlePoint> {
        self.points[range.start..range.end]
            .chunks(range.chunk.max(1))
            .filter_map(|chunk| {
                let (first, rest) = chunk.split_first()?;
                let mut merged = *first;
                for next in rest {
                    merged.merge(next);
                }
                Some(merged)
            })
            .collect()
    }

    fn candle_at(&self, plot: Rect, x: u16) -> Option<CandlePoint> {
        if x < plot.left() || x >= plot.right() {
            return None;
        }
        let range = self.visible_range(plot.width);
        let candles = self.candles_in(&range);
        let from_right = ((plot.right() - 1 - x) / range.spacing) as usize;
        candles
            .len()
            .checked_sub(from_right + 1)
            .and_then(|idx| candles.get(idx).copied())
    }

    fn render_price_axis(
        &self,
        layout: &ChartLayout,
        y_max: f64,
        y_scale: f64,
        buf: &mut Buffer,
        label_style: Style,
        axis_style: Style,
    ) {
        let axis = layout.price_axis;
        for i in 0..layout.plot.height {
            let y = axis.y + i;
            if i % PRICE_LABEL_EVERY == 0 {
                let value = y_max - y_scale * (i as f64 + 0.5);
                put_str(buf, axis.x, y, axis.right(), " ┤ ", axis_style);
                put_str(
                    buf,
                    axis.x + 3,
                    y,
                    axis.right(),
                    &numeric_format(value),
                    label_style,
                );
            } else {
                put_str(buf, axis.x, y, axis.right(), " │ ", axis_style);
            }
        }
    }

    fn render_time_axis(
        &self,
        layout: &ChartLayout,
        spacing: u16,
        candles: &[CandlePoint],
        buf: &mut Buffer,
        label_style: Style,
        axis_style: Style,
    ) {
        let Some(time_axis) = layout.time_axis else {
            return;
        };
        let plot = layout.plot;
        let width = plot.width as usize;

        let mut line = vec!['─'; width];
        let mut labels = vec![' '; width];

        // (column, date) left to right
        let mut placed = candles
            .iter()
            .rev()
            .enumerate()
            .filter_map(|(j, candle)| {
                let offset = j * spacing as usize;
                if offset >= width {
                    return None;
                }
                Some((width - 1 - offset, candle.date()?))
            })
            .collect::<Vec<(usize, NaiveDate)>>();
        placed.reverse();

        let mut place = |x: usize, text: String, overlap: bool| {
            let padded = if overlap { text } else { format!(" {text} ") };
            let idx = x as isize - (padded.chars().count() / 2) as isize;
            if overwrite_chars(&mut labels, idx, padded, overlap) {
                line[x] = '┴';
            }
        };

        if let Some((x, date)) = placed.first() {
            place(*x, date.format("%Y-%m-%d").to_string(), true);
        }
        for (x, prev, now) in placed
            .windows(2)
            .map(|pair| (pair[1].0, pair[0].1, pair[1].1))
        {
            if prev.year() != now.year() {
                place(x, now.format("%Y").to_string(), false);
            }
        }
        for (x, prev, now) in placed
            .windows(2)
            .map(|pair| (pair[1].0, pair[0].1, pair[1].1))
        {
            if prev.year() == now.year() && prev.month() != now.month() {
                place(x, now.format("%b").to_string(), false);
            }
        }
        if spacing >= 3 {
            for (x, prev, now) in placed
                .windows(2)
                .map(|pair| (pair[1].0, pair[0].1, pair[1].1))
            {
                if prev.month() == now.month() {
                    place(x, now.format("%d").to_string(), false);
                }
            }
        }

        let line_y = time_axis.y;
        put_str(
            buf,
            plot.x,
            line_y,
            plot.right(),
            &String::from_iter(line),
            axis_style,
        );
        put_str(buf, plot.right(), line_y, time_axis.right(), "─┘", axis_style);
        if time_axis.height > 1 {
            put_str(
                buf,
                plot.x,
                line_y + 1,
                plot.right(),
                &String::from_iter(labels),
                label_style,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_candle(
        &self,
        candle: &CandlePoint,
        x: u16,
        plot: Rect,
        y_scale: f64,
        y_min: f64,
        buf: &mut Buffer,
        base: Style,
    ) {
        let [y_open, y_high, y_low, y_close] = candle.calc_y(y_scale, y_min);
        let mut body = (y_open.min(y_close), y_open.max(y_close));
        if body.1 - body.0 < MIN_BODY {
            let mid = (body.0 + body.1) / 2.0;
            body = (mid - MIN_BODY / 2.0, mid + MIN_BODY / 2.0);
        }
        let wick = (y_low, y_high);

        let (body_color, wick_color) = if candle.is_bullish() {
            (self.series_style.up, self.series_style.wick_up)
        } else {
            (self.series_style.down, self.series_style.wick_down)
        };

        for row in 0..plot.height {
            let r = row as f64;
            let top = Fill::of(r + 0.5, r + 1.0, body, wick);
            let bottom = Fill::of(r, r + 0.5, body, wick);
            let glyph = glyph(top, bottom);
            if glyph == UNICODE_VOID {
                continue;
            }
            let color = if top == Fill::Body || bottom == Fill::Body {
                body_color
            } else {
                wick_color
            };
            put(buf, x, plot.bottom() - 1 - row, glyph, base.fg(color));
        }
    }

    fn render_crosshair(
        &self,
        layout: &ChartLayout,
        y_max: f64,
        y_scale: f64,
        buf: &mut Buffer,
        base: Style,
    ) {
        let Some(relative) = self.crosshair else {
            return;
        };
        let plot = layout.plot;
        let position = Position::new(
            layout.area.x.saturating_add(relative.x),
            layout.area.y.saturating_add(relative.y),
        );
        if !plot.contains(position) {
            return;
        }

        let line_style = base.fg(self.chart_style.grid);
        for y in plot.top()..plot.bottom() {
            if is_void(buf, position.x, y) {
                put(buf, position.x, y, "┆", line_style);
            }
        }
        for x in plot.left()..plot.right() {
            if is_void(buf, x, position.y) {
                put(buf, x, position.y, "┄", line_style);
            }
        }

        let value = y_max - y_scale * ((position.y - plot.y) as f64 + 0.5);
        let axis = layout.price_axis;
        put_str(
            buf,
            axis.x + 3,
            position.y,
            axis.right(),
            &numeric_format(value),
            base.add_modifier(Modifier::REVERSED),
        );

        if let Some(candle) = self.candle_at(plot, position.x) {
            put_str(
                buf,
                plot.x,
                plot.y,
                plot.right(),
                &legend(&candle),
                base.add_modifier(Modifier::BOLD),
            );
        }
    }
}

impl Widget for &CandleChart {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = self.layout(area.intersection(buf.area));
        if layout.area.is_empty() {
            return;
        }

        let base = Style::default()
            .fg(self.chart_style.text)
            .bg(self.chart_style.background);
        let axis_style = base.fg(self.chart_style.border);
        buf.set_style(layout.area, base);

        let range = self.visible_range(layout.plot.width);
        let candles = self.candles_in(&range);

        self.render_time_axis(&layout, range.spacing, &candles, buf, base, axis_style);

        if candles.is_empty() || layout.plot.is_empty() {
            return;
        }

        let mut y_max = candles.iter().map(|c| c.high).reduce(f64::max).unwrap_or(0.0);
        let mut y_min = candles.iter().map(|c| c.low).reduce(f64::min).unwrap_or(0.0);
        if (y_max - y_min).abs() < f64::EPSILON {
            y_max += 1.0;
            y_min -= 1.0;
        }
        let y_scale = (y_max - y_min) / layout.plot.height as f64;

        self.render_price_axis(&layout, y_max, y_scale, buf, base, axis_style);

        let plot = layout.plot;
        for (j, candle) in candles.iter().rev().enumerate() {
            let offset = j * range.spacing as usize;
            if offset >= plot.width as usize {
                break;
            }
            let x = plot.right() - 1 - offset as u16;
            self.render_candle(candle, x, plot, y_scale, y_min, buf, base);
        }

        if self.chart_style.crosshair {
            self.render_crosshair(&layout, y_max, y_scale, buf, base);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fill {
    Void,
    Wick,
    Body,
}

impl Fill {
    fn of(lo: f64, hi: f64, body: (f64, f64), wick: (f64, f64)) -> Self {
        if overlap(lo, hi, body) > MIN_COVER {
            Fill::Body
        } else if overlap(lo, hi, wick) > MIN_COVER {
            Fill::Wick
        } else {
            Fill::Void
        }
    }
}

fn overlap(lo: f64, hi: f64, (a, b): (f64, f64)) -> f64 {
    (hi.min(b) - lo.max(a)).max(0.0)
}

fn glyph(top: Fill, bottom: Fill) -> &'static str {
    match (top, bottom) {
        (Fill::Void, Fill::Void) => UNICODE_VOID,
        (Fill::Body, Fill::Body) => UNICODE_BODY,
        (Fill::Wick, Fill::Wick) => UNICODE_WICK,
        (Fill::Wick, Fill::Body) => UNICODE_UP,
        (Fill::Body, Fill::Wick) => UNICODE_DOWN,
        (Fill::Void, Fill::Body) => UNICODE_HALF_BODY_BOTTOM,
        (Fill::Void, Fill::Wick) => UNICODE_HALF_WICK_BOTTOM,
        (Fill::Body, Fill::Void) => UNICODE_HALF_BODY_TOP,
        (Fill::Wick, Fill::Void) => UNICODE_HALF_WICK_TOP,
    }
}

fn legend(candle: &CandlePoint) -> String {
    let date = candle
        .date()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    format!(
        "{date} O {:.2} H {:.2} L {:.2} C {:.2}",
        candle.open, candle.high, candle.low, candle.close
    )
}

fn is_void(buf: &Buffer, x: u16, y: u16) -> bool {
    buf.cell(Position::new(x, y))
        .is_some_and(|cell| cell.symbol() == UNICODE_VOID)
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

/// Writes `text` from `x` on, stopping before `max_x`.
fn put_str(buf: &mut Buffer, x: u16, y: u16, max_x: u16, text: &str, style: Style) {
    for (i, ch) in text.chars().enumerate() {
        let Some(cx) = x.checked_add(i as u16) else {
            break;
        };
        if cx >= max_x {
            break;
        }
        if let Some(cell) = buf.cell_mut(Position::new(cx, y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

fn overwrite_chars(chars: &mut [char], idx: isize, value: String, overlap: bool) -> bool {
    let value = value.chars().collect::<Vec<char>>();
    if chars.len() < value.len() {
        return false;
    }

    let idx = if idx < 0 {
        0
    } else if chars.len() < idx as usize + value.len() {
        chars.len() - value.len()
    } else {
        idx as usize
    };

    let target = &mut chars[idx..(idx + value.len())];
    if !overlap && target.iter().any(|&c| c != ' ') {
        return false;
    }
    target.copy_from_slice(&value);

    true
}

fn numeric_format(value: f64) -> String {
    let precision = 9;
    let scale = 2;
    format!("{value:>precision$.scale$}")
}

fn y_axis_width(g_max: f64, g_min: f64) -> u16 {
    std::cmp::max(numeric_format(g_max).len(), numeric_format(g_min).len()) as u16 + 4
}

const UNICODE_VOID: &str = " ";
const UNICODE_BODY: &str = "┃";
const UNICODE_WICK: &str = "│";
const UNICODE_UP: &str = "╽";
const UNICODE_DOWN: &str = "╿";
const UNICODE_HALF_BODY_BOTTOM: &str = "╻";
const UNICODE_HALF_WICK_BOTTOM: &str = "╷";
const UNICODE_HALF_BODY_TOP: &str = "╹";
const UNICODE_HALF_WICK_TOP: &str = "╵";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_chars_clamps_to_end() {
        let mut chars = vec![' '; 6];
        assert!(overwrite_chars(&mut chars, 4, "abc".to_string(), false));
        assert_eq!(String::from_iter(&chars), "   abc");
    }

    #[test]
    fn overwrite_chars_refuses_overlap() {
        let mut chars = vec![' '; 6];
        assert!(overwrite_chars(&mut chars, 0, "ab".to_string(), false));
        assert!(!overwrite_chars(&mut chars, 1, "cd".to_string(), false));
        assert!(overwrite_chars(&mut chars, 1, "cd".to_string(), true));
        assert_eq!(String::from_iter(&chars), "acd   ");
    }

    #[test]
    fn overwrite_chars_too_long() {
        let mut chars = vec![' '; 2];
        assert!(!overwrite_chars(&mut chars, 0, "abc".to_string(), true));
    }

    #[test]
    fn glyph_table() {
        assert_eq!(glyph(Fill::Body, Fill::Body), "┃");
        assert_eq!(glyph(Fill::Wick, Fill::Body), "╽");
        assert_eq!(glyph(Fill::Body, Fill::Wick), "╿");
        assert_eq!(glyph(Fill::Void, Fill::Wick), "╷");
        assert_eq!(glyph(Fill::Body, Fill::Void), "╹");
    }

    #[test]
    fn fill_prefers_body() {
        assert_eq!(Fill::of(0.0, 0.5, (0.0, 1.0), (0.0, 2.0)), Fill::Body);
        assert_eq!(Fill::of(1.5, 2.0, (0.0, 1.0), (0.0, 2.0)), Fill::Wick);
        assert_eq!(Fill::of(2.5, 3.0, (0.0, 1.0), (0.0, 2.0)), Fill::Void);
    }

    #[test]
    fn numeric_format_pads() {
        assert_eq!(numeric_format(131.75), "   131.75");
        assert_eq!(y_axis_width(131.75, 1.0), 13);
    }
}
