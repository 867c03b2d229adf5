pub mod button;
pub mod candle_chart;
pub mod error_banner;
pub mod form;
pub mod input_box;
