use crate::constants;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API domain for fetching statistics. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

/// Default API domain of the public statistics service
fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the built-in defaults are used without
    /// writing anything to disk. Environment variables can override both.
    ///
    /// # Environment Variables
    /// - `LIIGA_API_DOMAIN` - Override API domain
    /// - `LIIGA_LOG_FILE` - Override log file path
    /// - `LIIGA_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or default configuration
    /// * `Err(AppError)` - Error occurred during load
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            // The public API needs no credentials, so the defaults work out of the box
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(api_domain) = std::env::var(constants::env_vars::API_DOMAIN) {
            config.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(constants::env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(constants::env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            &self.log_file_path,
            self.http_timeout_seconds,
        )
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Ensures api_domain has https:// prefix
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// # Returns
    /// String containing the absolute path to the config file
    ///
    /// # Notes
    /// - Uses platform-specific config directory (e.g., ~/.config on Linux)
    /// - Falls back to current directory if config directory is unavailable
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    ///
    /// # Returns
    /// String containing the absolute path to the log directory
    ///
    /// # Notes
    /// - Uses platform-specific config directory (e.g., ~/.config on Linux)
    /// - Falls back to current directory if config directory is unavailable
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully displayed configuration
    /// * `Err(AppError)` - Error occurred while reading config
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!(
                    "{log_dir}/{}",
                    constants::logging::DEFAULT_LOG_FILE_NAME
                );
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!(
                "Using built-in defaults (API domain: {})",
                constants::DEFAULT_API_DOMAIN
            );
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// This method can be used for general configuration saving to any location,
    /// not just for testing purposes. It creates the parent directory if it doesn't exist
    /// and ensures the API domain has the proper https:// prefix.
    ///
    /// # Arguments
    /// * `path` - The file path where the configuration should be saved
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred while saving (e.g., invalid path, I/O error)
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain = if !self.api_domain.starts_with("https://") {
            format!("https://{}", self.api_domain.trim_start_matches("http://"))
        } else {
            self.api_domain.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
