//! Error types used by the crate.

use thiserror::Error;

/// Pathmap error type.
#[derive(Debug, Error)]
pub enum PathmapError {
    /// The imagery service has not finished initialization yet.
    #[error("imagery service is not ready")]
    NotReady,
    /// The imagery service was initialized a second time.
    #[error("imagery service is already initialized")]
    AlreadyInitialized,
    /// I/O error (network or file)
    #[error("failed to load data")]
    Io,
    /// Item is not available from the cache.
    #[error("item not found")]
    NotFound,
    /// Image decoding or encoding error.
    #[error("image decode error: {0:?}")]
    ImageDecode(#[from] image::ImageError),
    /// Error reading/writing data to the FS.
    #[error("failed to read file")]
    FsIo(#[from] std::io::Error),
    /// Generic error - details are inside.
    #[error("{0}")]
    Generic(String),
}

impl From<reqwest::Error> for PathmapError {
    fn from(_value: reqwest::Error) -> Self {
        Self::Io
    }
}
