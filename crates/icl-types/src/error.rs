use thiserror::Error;

/// Errors produced by type and codec operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:08x}, got {actual:08x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid principal: {0}")]
    InvalidPrincipal(String),
}

pub type TypeResult<T> = Result<T, TypeError>;
