//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::domain::PageSize;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "contacts.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file the directory is loaded from and saved to
    pub data_file: PathBuf,

    /// Records per page when listing (default: 5)
    pub page_size: PageSize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Snapshot file path (default: `contacts.json`)
    /// - `CONTACT_BOOK_PAGE_SIZE`: Records per page, at least 1 (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let data_file = env::var("CONTACT_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        if data_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_page_size("CONTACT_BOOK_PAGE_SIZE")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as a page size, defaulting when unset.
    fn parse_env_page_size(var_name: &str) -> ConfigResult<PageSize> {
        let val = match env::var(var_name) {
            Ok(val) => val,
            Err(_) => return Ok(PageSize::default()),
        };
        let size = val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Must be a positive number, got: {}", val),
        })?;
        PageSize::new(size).map_err(|e| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            page_size: PageSize::default(),
            log_level: "error".to_string(),
        }
    }
}
