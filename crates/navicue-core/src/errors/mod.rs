mod catalog_error;
mod config_error;
mod lifecycle_error;
mod response_error;
mod selection_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use lifecycle_error::LifecycleError;
pub use response_error::ResponseError;
pub use selection_error::SelectionError;

/// Root error type for the NaviCue engine.
#[derive(Debug, thiserror::Error)]
pub enum NavicueError {
    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("selection error: {0}")]
    SelectionError(#[from] SelectionError),

    #[error("invalid response: {0}")]
    InvalidResponse(#[from] ResponseError),

    #[error("lifecycle error: {0}")]
    LifecycleError(#[from] LifecycleError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("outcome sink {sink} failed: {reason}")]
    SinkFailed { sink: String, reason: String },

    #[error("no session with id {session_id}")]
    SessionNotFound { session_id: String },
}

impl NavicueError {
    /// Whether the interaction can continue after this error.
    ///
    /// Invalid responses and stale transitions are absorbed locally; only
    /// selection and catalog failures must reach the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidResponse(_) | Self::LifecycleError(LifecycleError::StaleTransition { .. })
        )
    }
}

pub type NavicueResult<T> = Result<T, NavicueError>;
