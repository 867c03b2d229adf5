use std::sync::mpsc;

use crate::chart::RenderError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    UtilsError(#[from] thong_utils::Error),

    #[error(transparent)]
    RatatuiExtraError(#[from] thong_ratatui_extra::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Poisoned lock, please restart thong. ({0})")]
    Poisoned(String),

    #[error("Draw failed: {0}")]
    Draw(std::io::Error),

    #[error("Unknown Theme: {0}")]
    UnknownTheme(String),

    #[error("Input thread panicked.")]
    InputThreadPanicked,

    #[error("Mpsc Recv Error: {0}")]
    MpscRecvError(#[from] mpsc::RecvError),
}
