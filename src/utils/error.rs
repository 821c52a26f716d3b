use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Content generation failed: {message}")]
    GenerationError { message: String },

    #[error("Publish rejected with status {status}: {message}")]
    PublishError { status: u16, message: String },

    #[error("Request signing failed: {message}")]
    SigningError { message: String },
}

pub type Result<T> = std::result::Result<T, BotError>;
