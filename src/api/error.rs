//! Task API-specific error types.

/// Errors that can occur during task API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    ApiError {
        status: u16,
        message: Option<String>,
    },

    /// Failed to deserialize API response. The message carries the error
    /// position only, never values from the body.
    #[error(
        "Failed to deserialize API response: {:?} error at line {} column {}",
        .0.classify(),
        .0.line(),
        .0.column()
    )]
    Deserialization(#[from] serde_json::Error),

    /// Request needs a session token but none is set
    #[error("No authorization token found")]
    MissingToken,
}

impl ApiError {
    /// Return the message to show the user: the server's own message when it
    /// sent one, otherwise the given fallback.
    ///
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::ApiError {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
