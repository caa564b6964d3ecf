use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Fetch failed for {location}: {message}")]
    FetchError { location: String, message: String },

    #[error("Model not found in catalog: {name}")]
    ModelNotFound { name: String },

    #[error("Prediction failed: {message}")]
    PredictionError { message: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;
