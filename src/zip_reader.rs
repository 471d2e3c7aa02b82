use super::unpack_error::UnpackZipError;
use super::zip_entry::ZipEntryInfo;
use super::zip_error::ZipReadError;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use zip::result::ZipError;
use zip::ZipArchive;

/// Opens a ZIP archive on disk
///
/// Failures here are not unpack errors, so `read_with_fallback` may hand the file to another backend.
pub fn open_archive<P: AsRef<Path>>(path: P) -> Result<ZipArchive<BufReader<File>>, ZipReadError> {
    let file = BufReader::new(File::open(path)?);
    return ZipArchive::new(file).map_err(classify_open_error);
}

/// Maps a backend error raised while opening an archive onto `ZipReadError`
fn classify_open_error(error: ZipError) -> ZipReadError {
    match error {
        ZipError::Io(e) => ZipReadError::IOError(e),
        ZipError::InvalidArchive(reason) => ZipReadError::InvalidZipArchive {
            reason: reason.to_string(),
        },
        ZipError::UnsupportedArchive(reason) => ZipReadError::UnsupportedZipArchive {
            reason: reason.to_string(),
        },
        other => ZipReadError::Archive(other),
    }
}

/// Reads the whole content of an entry
///
/// # Arguments
///
/// * `archive` - opened archive
/// * `entry_path` - full path of the entry inside the archive
pub fn read_bytes<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    entry_path: &str,
) -> Result<Vec<u8>, ZipReadError> {
    let mut entry = match archive.by_name(entry_path) {
        Ok(entry) => entry,
        Err(e) => {
            let message = match e {
                ZipError::FileNotFound => format!("entry not found: {}", entry_path),
                _ => format!("failed to read entry: {}", entry_path),
            };
            return Err(UnpackZipError::with_message_and_cause(message, Arc::new(e)).into());
        }
    };
    if entry.is_dir() {
        return Err(
            UnpackZipError::with_message(format!("entry is a directory: {}", entry_path)).into(),
        );
    }
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf).map_err(|e| {
        UnpackZipError::with_message_and_cause(
            format!("corrupted entry: {}", entry_path),
            Arc::new(e),
        )
    })?;
    return Ok(buf);
}

/// Reads an entry as UTF-8 text
pub fn read_text<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    entry_path: &str,
) -> Result<String, ZipReadError> {
    let buf = read_bytes(archive, entry_path)?;
    String::from_utf8(buf).map_err(|e| {
        UnpackZipError::with_message_and_cause(
            format!("entry is not valid UTF-8: {}", entry_path),
            Arc::new(e),
        )
        .into()
    })
}

/// Lists all entries in central directory order
///
/// Entries are opened raw, so encrypted entries and unsupported compression methods are still listed.
pub fn list_entries<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> Result<Vec<ZipEntryInfo>, ZipReadError> {
    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i).map_err(|e| {
            UnpackZipError::with_message_and_cause(
                format!("failed to list entry #{}", i),
                Arc::new(e),
            )
        })?;
        entries.push(ZipEntryInfo::from_entry(&entry));
    }
    return Ok(entries);
}

/// Reads with `primary`, handing over to `fallback` unless the failure is an unpack error
///
/// An `UnpackZipError` from `primary` is final: the archive opened fine but its contents are
/// unusable, and another backend would not do better.  If `fallback` itself fails with an
/// `UnpackZipError`, the error from `primary` is attached to it as suppressed.
pub fn read_with_fallback<T, P, F>(primary: P, fallback: F) -> Result<T, ZipReadError>
where
    P: FnOnce() -> Result<T, ZipReadError>,
    F: FnOnce() -> Result<T, ZipReadError>,
{
    let primary_error = match primary() {
        Ok(value) => return Ok(value),
        Err(e) if e.is_unpack() => return Err(e),
        Err(e) => e,
    };
    log::debug!(
        "primary ZIP backend failed, trying fallback: {}",
        primary_error
    );
    match fallback() {
        Ok(value) => Ok(value),
        Err(ZipReadError::Unpack(e)) => Err(e.with_suppressed(Arc::new(primary_error)).into()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_open_error_keeps_reason() {
        match classify_open_error(ZipError::InvalidArchive("Invalid zip header")) {
            ZipReadError::InvalidZipArchive { reason } => assert_eq!(reason, "Invalid zip header"),
            other => panic!("unexpected variant: {:?}", other),
        }
        match classify_open_error(ZipError::UnsupportedArchive("Encrypted")) {
            ZipReadError::UnsupportedZipArchive { reason } => assert_eq!(reason, "Encrypted"),
            other => panic!("unexpected variant: {:?}", other),
        }
        assert!(matches!(
            classify_open_error(ZipError::FileNotFound),
            ZipReadError::Archive(ZipError::FileNotFound)
        ));
    }
}
