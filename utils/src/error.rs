use std::path::PathBuf;

use chrono::NaiveDate;

use crate::reqwest::{ReqwestErrorContext, ReqwestInnerError, ReqwestStage};

pub type Result<T> = std::result::Result<T, UtilsError>;

/// Message shown when the backend rejects a request without an `error` field.
pub const FETCH_FAILED_FALLBACK: &str = "Failed to fetch data";

#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    #[error("Symbol cannot be empty.")]
    EmptySymbol,

    #[error("Date '{0}' is not a valid YYYY-MM-DD date.")]
    InvalidDate(String),

    #[error("Start date {start} is after end date {end}.")]
    DateRangeInverted { start: NaiveDate, end: NaiveDate },

    #[error("Failed to get base directories.")]
    BaseDirsFailed,

    #[error("Failed to create directory: {0:?}. (Error: {1:?})")]
    CreateDirAllFailed(PathBuf, std::io::Error),

    #[error("Failed to read the file: {0}. (Error: {1:?})")]
    FileReadFailed(PathBuf, std::io::Error),

    #[error("Failed to write to the file: {0}. (Error: {1:?})")]
    FileWriteFailed(PathBuf, std::io::Error),

    #[error("Parsing the toml file failed: {0}. (Error: {1:?})")]
    TomlParsingFailed(PathBuf, toml::de::Error),

    #[error("Formatting to toml format failed: {0}. (Error: {1:?})")]
    TomlFormattingFailed(String, toml::ser::Error),

    #[error("Unknown log level '{0}', expected one of trace, debug, info, warn, error.")]
    InvalidLogLevel(String),

    #[error("Failed to open log file {0:?}. (Error: {1:?})")]
    LogFileOpenFailed(PathBuf, std::io::Error),

    #[error("Global logger is already initialised.")]
    LoggerAlreadySet,

    #[error("Request '{url}' failed with status {status}. (Server message: {server_message:?})", url = context.url)]
    HttpStatus {
        status: u16,
        server_message: Option<String>,
        context: Box<ReqwestErrorContext>,
    },

    #[error("Request '{url}' failed at stage '{stage:?}' (Error='{inner:?}', Context='{context:?}')", url = context.url)]
    ReqwestFailed {
        stage: ReqwestStage,
        context: Box<ReqwestErrorContext>,
        inner: ReqwestInnerError,
    },

    #[error("Reqwest builder missing error context, this is a bug please report it.")]
    ReqwestErrorContextMissing,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl UtilsError {
    pub fn is_connect(&self) -> bool {
        match self {
            Self::ReqwestFailed { inner, .. } => inner.is_connect(),
            _ => false,
        }
    }

    /// The text a user should see for this error: the server's own `error`
    /// field when it sent one, the generic fallback for other rejected
    /// requests, and the transport error text otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::HttpStatus { server_message, .. } => server_message
                .clone()
                .unwrap_or_else(|| FETCH_FAILED_FALLBACK.to_string()),
            Self::ReqwestFailed {
                inner: ReqwestInnerError::Reqwest(err),
                ..
            } => err.to_string(),
            Self::ReqwestFailed {
                inner: ReqwestInnerError::SerdePath(err),
                ..
            } => format!("Unexpected response from backend: {err}"),
            _ => self.to_string(),
        }
    }
}
