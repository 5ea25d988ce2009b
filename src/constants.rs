//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default base URL of the Liiga statistics API
pub const DEFAULT_API_DOMAIN: &str = "https://liiga.fi/api/v2";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Number of response body characters included in decode error diagnostics
pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// Season range constants
pub mod seasons {
    /// First season recorded by the statistics API
    pub const FIRST_SEASON: i32 = 1976;

    /// Month from which dates belong to the season ending next spring.
    /// Liiga seasons are named after the year they end in, so from August
    /// onward the current season is `year + 1`.
    pub const SEASON_ROLLOVER_MONTH: u32 = 8;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "LIIGA_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "LIIGA_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "LIIGA_HTTP_TIMEOUT";
}

/// Logging defaults
pub mod logging {
    /// Log file name used when no custom path is configured
    pub const DEFAULT_LOG_FILE_NAME: &str = "liiga_stats.log";

    /// Default EnvFilter directive for the crate
    pub const DEFAULT_FILTER_DIRECTIVE: &str = "liiga_stats=info";

    /// EnvFilter directive used when --debug is set
    pub const DEBUG_FILTER_DIRECTIVE: &str = "liiga_stats=debug";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_constants_are_reasonable() {
        assert!(DEFAULT_HTTP_TIMEOUT_SECONDS > 0);
        assert!(DEFAULT_HTTP_TIMEOUT_SECONDS <= 300);
        assert!(HTTP_POOL_MAX_IDLE_PER_HOST > 0);
        assert!(ERROR_BODY_PREVIEW_CHARS >= 100);
    }

    #[test]
    fn test_api_domain_uses_https() {
        assert!(DEFAULT_API_DOMAIN.starts_with("https://"));
        assert!(!DEFAULT_API_DOMAIN.ends_with('/'));
    }

    #[test]
    fn test_season_constants_are_valid() {
        assert!(seasons::FIRST_SEASON >= 1900);
        assert!((1..=12).contains(&seasons::SEASON_ROLLOVER_MONTH));
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        assert!(!env_vars::API_DOMAIN.is_empty());
        assert!(!env_vars::LOG_FILE.is_empty());
        assert!(!env_vars::HTTP_TIMEOUT.is_empty());
    }

    #[test]
    fn test_logging_directives_reference_crate() {
        assert!(logging::DEFAULT_FILTER_DIRECTIVE.starts_with("liiga_stats="));
        assert!(logging::DEBUG_FILTER_DIRECTIVE.starts_with("liiga_stats="));
        assert!(logging::DEFAULT_LOG_FILE_NAME.ends_with(".log"));
    }
}
