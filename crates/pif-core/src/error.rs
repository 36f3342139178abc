//! Error types for PIF operations

use crate::Channel;
use thiserror::Error;

/// Result type for PIF operations
pub type PifResult<T> = Result<T, PifError>;

/// Errors that can occur during PIF encoding/decoding
#[derive(Error, Debug)]
pub enum PifError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Truncated stream: {0}")]
    TruncatedStream(String),

    #[error("Invalid code lengths: {0}")]
    InvalidCodeLengths(String),

    #[error("Invalid code: {0}")]
    InvalidCode(String),

    #[error("Channel {0} has no symbols")]
    EmptyChannel(Channel),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("Image too large: {pixels} pixels exceeds limit of {limit}")]
    ImageTooLarge { pixels: usize, limit: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl PifError {
    /// Whether the error means the input ended before a complete image was read
    pub fn is_truncation(&self) -> bool {
        match self {
            PifError::TruncatedStream(_) => true,
            PifError::Io(e) => e.kind() == std::io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}
