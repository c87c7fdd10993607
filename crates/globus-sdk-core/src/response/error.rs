//! Response error types

use thiserror::Error;

/// Errors raised by response wrappers
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The wrapped data cannot be indexed at all, or not with this kind of key.
    ///
    /// This is the only error a wrapper reports for indexing capability,
    /// whatever type the payload is.
    #[error("This type of GlobusResponse object does not support indexing")]
    NotIndexable,

    /// The data is a mapping but has no such key
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// The data is a sequence shorter than the index
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The transport failed while the response body was being read
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ResponseError {
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound(key.into())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// True for conditions raised by the payload itself (missing key or index)
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, Self::KeyNotFound(_) | Self::IndexOutOfRange { .. })
    }
}

pub type ResponseResult<T> = Result<T, ResponseError>;
