use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Step index {index} out of range (configured steps: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Animation property '{property}' in step {step} is not supported")]
    UnsupportedProperty { step: usize, property: String },

    #[error("Invalid animation spec: {0}")]
    InvalidSpec(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
