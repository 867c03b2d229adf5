//! A small stock price backend for development and tests. Answers
//! `GET /api/stock/{symbol}?start=YYYY-MM-DD&end=YYYY-MM-DD` with daily bars
//! from fixtures or from a deterministic random walk.
pub mod error;
mod serve;
pub mod store;

pub use error::{MockApiError as Error, Result};
pub use serve::*;
