//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Operation needs an authenticated session
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Operation needs an unauthenticated session
    #[error("Already authenticated")]
    AlreadyAuthenticated,

    /// Task not found in state
    #[error("Task not found: {id}")]
    TaskNotFound { id: String },
}
