#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Error message reported by the backend (`detail`/`error` field),
    /// displayed to the user verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
