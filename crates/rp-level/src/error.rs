use thiserror::Error;

use rp_core::RpError;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("level JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tuning TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid level: {0}")]
    Invalid(String),

    #[error(transparent)]
    Core(#[from] RpError),
}

pub type LevelResult<T> = Result<T, LevelError>;
