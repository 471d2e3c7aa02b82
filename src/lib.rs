//! Error type and entry readers for unpacking ZIP archives
//!
//! `UnpackZipError` is raised when the contents of an archive cannot be unpacked or read.
//! Archive-level failures are reported as `ZipReadError`, which wraps `UnpackZipError` in its
//! `Unpack` variant.

pub mod unpack_error;
pub mod zip_entry;
pub mod zip_error;
pub mod zip_reader;

pub use unpack_error::{Cause, UnpackZipError};
pub use zip_entry::{ZipEntryBase, ZipEntryInfo};
pub use zip_error::ZipReadError;
pub use zip_reader::{list_entries, open_archive, read_bytes, read_text, read_with_fallback};
