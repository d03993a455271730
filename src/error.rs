use thiserror::Error;

use crate::types::ImageFormat;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SniffError {
    #[error("unrecognized image format")]
    UnrecognizedFormat,

    #[error("unexpected end of {format} stream at offset {offset}")]
    UnexpectedEof { format: ImageFormat, offset: usize },

    #[error("malformed {format} stream: {reason}")]
    Malformed {
        format: ImageFormat,
        reason: &'static str,
    },
}

impl SniffError {
    /// True for the negative "no magic matched" outcome, as opposed to a
    /// recognized-but-broken image.
    #[inline]
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, SniffError::UnrecognizedFormat)
    }
}

pub type Result<T> = std::result::Result<T, SniffError>;
