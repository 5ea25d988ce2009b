use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Request validation errors, raised before any request is sent
    #[error("Invalid season range: start season {start} is after end season {end}")]
    InvalidSeasonRange { start: i32, end: i32 },

    #[error("Invalid game type '{value}': expected one of {allowed}")]
    InvalidGameType { value: String, allowed: String },

    #[error("Invalid data type '{value}': expected one of {allowed}")]
    InvalidDataType { value: String, allowed: String },

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Response decoding errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid season range error
    pub fn invalid_season_range(start: i32, end: i32) -> Self {
        Self::InvalidSeasonRange { start, end }
    }

    /// Create an invalid game type error listing the accepted tokens
    pub fn invalid_game_type(value: impl Into<String>, allowed: impl Into<String>) -> Self {
        Self::InvalidGameType {
            value: value.into(),
            allowed: allowed.into(),
        }
    }

    /// Create an invalid data type error listing the accepted codes
    pub fn invalid_data_type(value: impl Into<String>, allowed: impl Into<String>) -> Self {
        Self::InvalidDataType {
            value: value.into(),
            allowed: allowed.into(),
        }
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Check if error was raised by parameter validation before any request was sent
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidSeasonRange { .. }
                | AppError::InvalidGameType { .. }
                | AppError::InvalidDataType { .. }
        )
    }

    /// Check if error came from the transport layer or a non-success HTTP status
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiNotFound { .. }
                | AppError::ApiRateLimit { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
        )
    }

    /// Check if error came from decoding or reshaping a response body
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiParse(_)
                | AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
        )
    }
}
