#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ApiError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Failed to parse response: {0}")]
    DecodeError(String),

    /// Rejected product creation; displays the backend's response body verbatim.
    #[error("{0}")]
    CreationError(String),

    #[error("Error fetching best price: {0}")]
    BestPriceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
