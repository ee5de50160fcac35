use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(#[from] log::SetLoggerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Frame of {length} bytes exceeds the slot capacity of {max} bytes")]
    OversizeFrame { length: usize, max: usize },

    #[error("Frame queue used before initialization")]
    Uninitialized,

    #[error("Frame queue is already initialized")]
    AlreadyInitialized,

    #[error("Invalid queue geometry: {0}")]
    InvalidCapacity(String),

    #[error("Stream has not been started")]
    NotStreaming,

    #[error("Device session error: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

// Helper functions for creating errors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        AppError::Unknown(msg.into())
    }
}

impl StreamError {
    pub fn invalid_capacity(msg: impl Into<String>) -> Self {
        StreamError::InvalidCapacity(msg.into())
    }

    pub fn session(msg: impl Into<String>) -> Self {
        StreamError::Session(msg.into())
    }
}
