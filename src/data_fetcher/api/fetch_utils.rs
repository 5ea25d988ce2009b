//! Generic HTTP fetching utilities with error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::ERROR_BODY_PREVIEW_CHARS;
use crate::error::AppError;

/// Clips a response body for logging and error payload fragments.
fn body_preview(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect()
}

/// Generic fetch function with comprehensive error handling.
///
/// Exactly one GET per call: no retries, no caching, so callers see
/// precisely what the API returned. Failures classify into network errors
/// (connection, timeout, non-success status) and decode errors (empty,
/// malformed or structurally unexpected JSON). Decode errors carry the
/// offending body fragment; a truncated body surfaces here as a parse
/// failure with the fragment attached.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        // Return specific error types based on HTTP status code
        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            let preview = body_preview(&response_text);

            // Distinguish malformed JSON from an unexpected structure
            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    format!("Response is not valid JSON: {preview}"),
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(
                    format!("{e}; body: {preview}"),
                    url,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_preview_clips_long_bodies() {
        let long_body = "x".repeat(ERROR_BODY_PREVIEW_CHARS * 2);
        assert_eq!(body_preview(&long_body).len(), ERROR_BODY_PREVIEW_CHARS);
    }

    #[test]
    fn test_body_preview_keeps_short_bodies() {
        assert_eq!(body_preview("{\"ok\":true}"), "{\"ok\":true}");
    }

    #[test]
    fn test_body_preview_counts_chars_not_bytes() {
        let body = "ä".repeat(ERROR_BODY_PREVIEW_CHARS + 10);
        assert_eq!(
            body_preview(&body).chars().count(),
            ERROR_BODY_PREVIEW_CHARS
        );
    }
}
