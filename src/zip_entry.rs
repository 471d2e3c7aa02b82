/// Backend-neutral view of an entry in a ZIP archive
pub trait ZipEntryBase {
    /// Full path of the entry inside the archive (`/` separated)
    fn name(&self) -> &str;
    /// Returns `true` if the entry is a directory
    fn is_directory(&self) -> bool;
}

/// Owned snapshot of an entry, detached from the archive it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntryInfo {
    pub name: String,
    pub is_directory: bool,
    /// Uncompressed size in bytes
    pub size: u64,
}

impl ZipEntryInfo {
    pub fn from_entry(entry: &zip::read::ZipFile) -> Self {
        return Self {
            name: entry.name().to_string(),
            is_directory: entry.is_dir(),
            size: entry.size(),
        };
    }
}

impl ZipEntryBase for ZipEntryInfo {
    fn name(&self) -> &str {
        &self.name
    }
    fn is_directory(&self) -> bool {
        self.is_directory
    }
}

impl<'a> ZipEntryBase for zip::read::ZipFile<'a> {
    fn name(&self) -> &str {
        zip::read::ZipFile::name(self)
    }
    fn is_directory(&self) -> bool {
        self.is_dir()
    }
}
