use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("invalid remote image URL: {0:?}")]
    InvalidReference(String),

    #[error("not allowed remote URL origin: {0}")]
    OriginNotAllowed(String),

    #[error("Content-Length {reported} exceeds maximum allowed {limit} bytes")]
    SizeExceeded { reported: u64, limit: u64 },

    #[error("{0}")]
    Backend(String),

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SourceError>;
