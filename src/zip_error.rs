use super::unpack_error::UnpackZipError;

/// Errors raised while opening or reading a ZIP archive
///
/// Failures inside an entry are carried by the `Unpack` variant.
#[derive(thiserror::Error, Debug)]
pub enum ZipReadError {
    /// See `std::io::Error`
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    /// An error due to invalid ZIP archive
    #[error("the file seems not to be a valid ZIP archive because: {reason}")]
    InvalidZipArchive { reason: String },
    /// An error due to unsupported ZIP archive in this software
    #[error("this ZIP archive is not supported because: {reason}")]
    UnsupportedZipArchive { reason: String },
    /// The ZIP backend failed outside of reading an entry (e.g. while opening the archive)
    #[error("failed to open ZIP archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    /// Reading the contents of an entry failed.  Never retried with another backend.
    #[error(transparent)]
    Unpack(#[from] UnpackZipError),
}

impl ZipReadError {
    /// Returns `true` if this is an `UnpackZipError`
    pub fn is_unpack(&self) -> bool {
        matches!(self, ZipReadError::Unpack(_))
    }

    /// Borrows the inner `UnpackZipError` if this is one
    pub fn as_unpack(&self) -> Option<&UnpackZipError> {
        match self {
            ZipReadError::Unpack(e) => Some(e),
            _ => None,
        }
    }
}
