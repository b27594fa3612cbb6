//! Top-level error type for the client.
//!
//! Each layer keeps its own error enum; `AppError` wraps them so startup and
//! the event loops can propagate with `?`.

pub use crate::api::ApiError;
pub use crate::config::ConfigError;
pub use crate::state::StateError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Task API error: {0}")]
    Api(#[from] ApiError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raw mode could not be toggled.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A global logger was already installed.
    #[error("Logger error: {0}")]
    Logger(String),
}

pub type AppResult<T> = Result<T, AppError>;
