pub type Result<T> = std::result::Result<T, MockApiError>;

#[derive(Debug, thiserror::Error)]
pub enum MockApiError {
    #[error("Failed to bind to port {0}. (Error: {1})")]
    PortBindingFailed(u16, std::io::Error),

    #[error("Failed to read the bound address. (Error: {0})")]
    LocalAddrFailed(std::io::Error),

    #[error("Server crashed. (Error: {0})")]
    ServerCrashed(std::io::Error),

    #[error("Server task failed to join. (Error: {0})")]
    JoinFailed(#[from] tokio::task::JoinError),
}
