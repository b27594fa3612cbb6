//! Configuration management module.
//!
//! This module handles loading, saving, and managing application
//! configuration, including the API location and the persisted session
//! token.

mod error;

pub use error::ConfigError;

use crate::error::{AppError, AppResult};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/tasks-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub access_token: Option<String>,
    pub theme_name: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    saved_api_url: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Trim the URL and drop trailing slashes. Only http and https locations
/// with a host are accepted.
///
fn normalize_api_url(url: &str) -> Result<String, ConfigError> {
    let url = url.trim().trim_end_matches('/');
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(url.to_string()),
        _ => Err(ConfigError::UnsupportedApiUrl(url.to_string())),
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default values and no file.
    ///
    pub fn new() -> Config {
        Config {
            api_url: default_api_url(),
            saved_api_url: default_api_url(),
            access_token: None,
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout_secs(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided, otherwise the default directory. A missing file
    /// leaves the defaults in place; it is written on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::Write {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(FILE_NAME);
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::Read {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|e| ConfigError::Malformed {
                    path: file_path.clone(),
                    message: e.to_string(),
                })?;
            self.access_token = data.access_token.filter(|token| !token.is_empty());
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
            self.request_timeout_secs = data.request_timeout_secs;
            self.file_path = Some(file_path);
            self.set_api_url(&data.api_url)?;
        } else {
            self.file_path = Some(file_path);
        }

        Ok(())
    }

    /// Point the client at another API, dropping a trailing slash. Only
    /// http and https locations are accepted.
    ///
    pub fn set_api_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.api_url = normalize_api_url(url)?;
        self.saved_api_url = self.api_url.clone();
        Ok(())
    }

    /// Use another API for this run only. The configuration file keeps its
    /// own location.
    ///
    pub fn override_api_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.api_url = normalize_api_url(url)?;
        Ok(())
    }

    /// Return the path of the configuration file, if one was resolved.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Return the configured log level.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Return the configured request timeout.
    ///
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Serialize the configuration data and write it to the disk, creating
    /// the parent directory if needed.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NoFile)?;
        let data = FileSpec {
            api_url: self.saved_api_url.clone(),
            access_token: self.access_token.clone(),
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
            request_timeout_secs: self.request_timeout_secs,
        };
        let content =
            serde_yaml::to_string(&data).map_err(|e| ConfigError::Encode(e.to_string()))?;

        let write_error = |path: &Path, source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
            }
        }
        let mut file = fs::File::create(file_path).map_err(|e| write_error(file_path, e))?;
        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| write_error(file_path, e))?;
        Ok(())
    }

    /// Persist the session token.
    ///
    pub fn save_token(&mut self, token: String) -> AppResult<()> {
        self.ensure_file_path()?;
        self.access_token = Some(token);
        self.save()
    }

    /// Remove the persisted session token.
    ///
    pub fn clear_token(&mut self) -> AppResult<()> {
        self.ensure_file_path()?;
        self.access_token = None;
        self.save()
    }

    /// Fall back to the default file path when none was loaded.
    ///
    fn ensure_file_path(&mut self) -> AppResult<()> {
        if self.file_path.is_none() {
            let dir_path = Config::default_path()?;
            self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        }
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::NoHomeDirectory.into()),
        }
    }
}
