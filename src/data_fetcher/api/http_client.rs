//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates a properly configured HTTP client with connection pooling and
/// the caller's request timeout.
///
/// The timeout covers the whole request, connect included, so a stalled
/// upstream surfaces as a timeout error instead of hanging the caller.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
///
/// # Features
/// * Configurable timeout for requests (default: 30 seconds, configurable via config/env)
/// * Connection pooling with centralized pool size configuration
/// * HTTP/2 multiplexing when available
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}
