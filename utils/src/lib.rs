pub mod config;
pub mod disk_storage;
pub mod error;
pub mod log;
pub mod reqwest;
pub mod serde;
pub mod stock;
pub mod task;

pub use error::{Result, UtilsError as Error, FETCH_FAILED_FALLBACK};

pub use reqwest::Reqwest;
