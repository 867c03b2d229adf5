pub mod chart_view;
pub mod footer;
pub mod title;
