//! Configuration management for the contact book and library tools.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory. Every setting has a default, so
//! the tools run with no configuration at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Map a `LOG_LEVEL` value onto a tracing level name.
///
/// Accepts tracing's names plus `warning`, `critical`, `fatal` and `notset`,
/// case-insensitively. Returns `None` for anything else.
pub fn normalize_log_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_lowercase().as_str() {
        "trace" | "notset" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" | "critical" | "fatal" => Some("error"),
        _ => None,
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding all JSON data files (default: "data")
    pub data_dir: PathBuf,

    /// Contact file name inside `data_dir` (default: "contacts_data.json")
    pub contacts_file_name: String,

    /// Book catalogue file name inside `data_dir` (default: "books.json")
    pub books_file_name: String,

    /// Library user file name inside `data_dir` (default: "users.json")
    pub users_file_name: String,

    /// Log file, appended to on every run (default: "contact_book.log")
    pub log_file: PathBuf,

    /// Log level (default: "info")
    pub log_level: String,

    /// Unrecognised `LOG_LEVEL` value that was replaced by "info"
    pub ignored_log_level: Option<String>,

    /// Bind address for the library REST API (default: 127.0.0.1:8000)
    pub api_addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DATA_DIR`: data directory (default: "data")
    /// - `CONTACTS_FILE_NAME`: contact file (default: "contacts_data.json")
    /// - `BOOKS_FILE_NAME`: book file (default: "books.json")
    /// - `USERS_FILE_NAME`: user file (default: "users.json")
    /// - `LOG_FILE`: log file path (default: "contact_book.log")
    /// - `LOG_LEVEL`: trace/debug/info/warn(ing)/error/critical (default: "info";
    ///   unknown values fall back to "info")
    /// - `LIBRARY_API_ADDR`: REST API bind address (default: "127.0.0.1:8000")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let contacts_file_name =
            Self::parse_file_name("CONTACTS_FILE_NAME", defaults.contacts_file_name)?;
        let books_file_name = Self::parse_file_name("BOOKS_FILE_NAME", defaults.books_file_name)?;
        let users_file_name = Self::parse_file_name("USERS_FILE_NAME", defaults.users_file_name)?;
        let log_file = env::var("LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        let (log_level, ignored_log_level) = match env::var("LOG_LEVEL") {
            Ok(raw) => match normalize_log_level(&raw) {
                Some(level) => (level.to_string(), None),
                None => (defaults.log_level, Some(raw)),
            },
            Err(_) => (defaults.log_level, None),
        };

        let api_addr = match env::var("LIBRARY_API_ADDR") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "LIBRARY_API_ADDR".to_string(),
                reason: format!("Must be a host:port socket address, got: {}", val),
            })?,
            Err(_) => defaults.api_addr,
        };

        Ok(Config {
            data_dir,
            contacts_file_name,
            books_file_name,
            users_file_name,
            log_file,
            log_level,
            ignored_log_level,
            api_addr,
        })
    }

    /// Read a bare file name; path separators are rejected so every data
    /// file stays inside `data_dir`.
    fn parse_file_name(var_name: &str, default: String) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let val = val.trim().to_string();
                if val.is_empty() || val.contains('/') || val.contains('\\') {
                    return Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be a plain file name, got: {:?}", val),
                    });
                }
                Ok(val)
            }
            Err(_) => Ok(default),
        }
    }

    /// Full path of the contact file.
    pub fn contacts_path(&self) -> PathBuf {
        self.data_dir.join(&self.contacts_file_name)
    }

    /// Full path of the book catalogue file.
    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file_name)
    }

    /// Full path of the library user file.
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file_name)
    }

    /// Point all data files at another directory.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("data"),
            contacts_file_name: "contacts_data.json".to_string(),
            books_file_name: "books.json".to_string(),
            users_file_name: "users.json".to_string(),
            log_file: PathBuf::from("contact_book.log"),
            log_level: "info".to_string(),
            ignored_log_level: None,
            api_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}
