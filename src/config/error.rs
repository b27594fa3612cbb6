//! Errors raised while reading or writing the configuration file.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No configuration file has been resolved")]
    NoFile,

    /// The default directory lives under the user's home.
    #[error("Could not locate the home directory")]
    NoHomeDirectory,

    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Covers both the token file writes and directory creation.
    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed configuration in {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Could not encode configuration: {0}")]
    Encode(String),

    #[error("Unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("API URL must start with http:// or https://, got '{0}'")]
    UnsupportedApiUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            ConfigError::UnknownLogLevel("loud".to_string()).to_string(),
            "Unknown log level 'loud'"
        );
        assert!(ConfigError::UnsupportedApiUrl("ftp://x".to_string())
            .to_string()
            .contains("ftp://x"));
    }

    #[test]
    fn io_failures_name_the_path() {
        let error = ConfigError::Write {
            path: PathBuf::from("/tmp/tasks/config.yml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("/tmp/tasks/config.yml"));
        assert!(message.contains("denied"));
    }
}
