pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tui(#[from] thong_tui::Error),

    #[error(transparent)]
    Utils(#[from] thong_utils::Error),

    #[error(transparent)]
    MockApi(#[from] thong_mock_api::Error),
}
