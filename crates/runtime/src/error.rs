/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors surfaced to clients of the runtime.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The worker task is gone; commands can no longer be delivered.
    #[error("runtime worker is not running")]
    WorkerGone,

    /// A query was delivered but the worker dropped the reply channel.
    #[error("runtime worker dropped the reply")]
    ReplyDropped,

    #[error(transparent)]
    Repository(#[from] crate::repository::RepositoryError),
}
