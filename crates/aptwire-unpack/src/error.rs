use aptwire_proto::CatalogError;

/// Errors surfaced while unpacking a byte stream.
#[derive(Debug, thiserror::Error)]
pub enum UnpackError {
    /// The byte source failed. Passed through unchanged.
    #[error("unpack I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One frame could not be decoded. Its bytes have been consumed and the
    /// next frame is unaffected.
    #[error(transparent)]
    Decode(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, UnpackError>;
