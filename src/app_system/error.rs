use thiserror::Error;

/// Errors raised while starting or stopping the user system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Store task failed: {0}")]
    StoreTask(#[from] tokio::task::JoinError),
}
