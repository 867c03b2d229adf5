use ratatui::style::Color;
use thong_ratatui_extra::candle_chart::{ChartStyle, SeriesStyle};

/// Options a chart is created with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    pub width: u16,
    pub height: u16,
    pub background: Color,
    pub text_color: Color,
    pub grid_color: Color,
    pub border_color: Color,
    /// Crosshair following the mouse.
    pub crosshair: bool,
    pub time_visible: bool,
}

impl ChartOptions {
    pub fn dark(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            background: Color::Rgb(0x1f, 0x29, 0x37),
            text_color: Color::Rgb(0xd1, 0xd5, 0xdb),
            grid_color: Color::Rgb(0x37, 0x41, 0x51),
            border_color: Color::Rgb(0x37, 0x41, 0x51),
            crosshair: true,
            time_visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandlestickSeriesOptions {
    pub up_color: Color,
    pub down_color: Color,
    pub wick_up_color: Color,
    pub wick_down_color: Color,
}

impl Default for CandlestickSeriesOptions {
    fn default() -> Self {
        let up_color = Color::Rgb(0x10, 0xb9, 0x81);
        let down_color = Color::Rgb(0xef, 0x44, 0x44);
        Self {
            up_color,
            down_color,
            wick_up_color: up_color,
            wick_down_color: down_color,
        }
    }
}

impl From<&ChartOptions> for ChartStyle {
    fn from(options: &ChartOptions) -> Self {
        ChartStyle {
            background: options.background,
            text: options.text_color,
            grid: options.grid_color,
            border: options.border_color,
            crosshair: options.crosshair,
            time_axis_visible: options.time_visible,
        }
    }
}

// Candle bodies are a single glyph, there is no separate border to colour.
impl From<&CandlestickSeriesOptions> for SeriesStyle {
    fn from(options: &CandlestickSeriesOptions) -> Self {
        SeriesStyle {
            up: options.up_color,
            down: options.down_color,
            wick_up: options.wick_up_color,
            wick_down: options.wick_down_color,
        }
    }
}
