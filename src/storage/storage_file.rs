//! Flat-file registry store.

use super::format::StoredRegistry;
use super::traits::RegistryStore;
use crate::domain::ValidationError;
use crate::error::{StorageError, StorageResult};
use crate::models::Registry;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-name suffixes accepted by [`StorageFile::new`].
pub const DEFAULT_SUFFIXES: &[&str] = &["txt"];

/// A registry store bound to one file path.
///
/// The path is checked once, when the store is created. Nothing touches the
/// filesystem until [`RegistryStore::load`] or [`RegistryStore::save`] is
/// called, and no file handle outlives a single call.
///
/// # Example
///
/// ```
/// use contact_registry::storage::StorageFile;
///
/// assert!(StorageFile::new("data/addressbook.txt").is_ok());
/// assert!(StorageFile::new("data/addressbook").is_err());
/// assert!(StorageFile::with_suffixes("data/addressbook.json", &["json"]).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct StorageFile {
    path: PathBuf,
}

impl StorageFile {
    /// Bind to `path`, which must end with one of [`DEFAULT_SUFFIXES`].
    pub fn new(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::with_suffixes(path, DEFAULT_SUFFIXES)
    }

    /// Bind to `path`, which must end with one of `accepted` (without the dot).
    ///
    /// # Errors
    ///
    /// - `StorageError::EmptyPath` if `path` is empty
    /// - `StorageError::InvalidPath` if the file name's extension is not accepted
    pub fn with_suffixes<S: AsRef<str>>(
        path: impl AsRef<Path>,
        accepted: &[S],
    ) -> StorageResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(StorageError::EmptyPath);
        }

        let file_name = path.file_name().and_then(|name| name.to_str());
        let is_accepted = file_name
            .map(|name| {
                accepted
                    .iter()
                    .any(|suffix| Self::has_suffix(name, suffix.as_ref()))
            })
            .unwrap_or(false);
        if !is_accepted {
            return Err(StorageError::InvalidPath(
                ValidationError::UnsupportedFileSuffix {
                    path: path.display().to_string(),
                    accepted: accepted.iter().map(|s| s.as_ref().to_string()).collect(),
                },
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// True if `file_name` is `<stem>.<suffix>` with a non-empty stem.
    /// `suffix` may itself contain dots (`tar.gz`).
    fn has_suffix(file_name: &str, suffix: &str) -> bool {
        if suffix.is_empty() {
            return false;
        }
        file_name
            .strip_suffix(suffix)
            .and_then(|rest| rest.strip_suffix('.'))
            .map(|stem| !stem.is_empty())
            .unwrap_or(false)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> StorageResult<StoredRegistry> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::NotFound => "file not found".to_string(),
                _ => format!("file could not be read: {}", e),
            };
            StorageError::operation(&self.path, reason)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            StorageError::operation(&self.path, format!("malformed registry content: {}", e))
        })
    }

    fn render(&self, registry: &Registry) -> StorageResult<String> {
        let mut document = serde_json::to_string_pretty(&StoredRegistry::from(registry))
            .map_err(|e| StorageError::operation(&self.path, e))?;
        document.push('\n');
        Ok(document)
    }

    /// Write `data` to a `.tmp` sibling, then rename it over the target.
    fn atomic_write(&self, data: &[u8]) -> StorageResult<()> {
        let io_error = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, data).map_err(io_error)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_error(e));
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp: OsString = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl RegistryStore for StorageFile {
    fn load(&self) -> StorageResult<Registry> {
        let registry = self
            .read_document()
            .and_then(|document| {
                document
                    .into_registry()
                    .map_err(|e| StorageError::operation(&self.path, e))
            })
            .map_err(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to load registry");
                e
            })?;

        tracing::info!(
            path = %self.path.display(),
            contacts = registry.len(),
            "Registry loaded"
        );
        Ok(registry)
    }

    fn save(&self, registry: &Registry) -> StorageResult<()> {
        let document = self.render(registry)?;
        self.atomic_write(document.as_bytes())?;

        tracing::info!(
            path = %self.path.display(),
            contacts = registry.len(),
            "Registry saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Email, Name, Phone, TagSet};
    use crate::models::ContactRecord;
    use tempfile::TempDir;

    fn sample_registry() -> Registry {
        let record = ContactRecord::new(
            Name::new("Jane Roe").unwrap(),
            Phone::new("123", true).unwrap(),
            Email::new("jane@roe.org", false).unwrap(),
            Address::new("Blk 9", false).unwrap(),
            TagSet::from_labels(["work"]).unwrap(),
        );
        Registry::from_records(vec![record]).unwrap()
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(StorageFile::new(""), Err(StorageError::EmptyPath)));
    }

    #[test]
    fn test_suffix_rules() {
        assert!(matches!(
            StorageFile::new("dir/InvalidFileName"),
            Err(StorageError::InvalidPath(_))
        ));
        assert!(StorageFile::new("dir/book.json").is_err());
        assert!(StorageFile::new("dir/book.TXT").is_err());
        assert!(StorageFile::new("dir/.txt").is_err());
        assert!(StorageFile::new("book.txt").is_ok());

        let no_suffixes: &[&str] = &[];
        assert!(StorageFile::with_suffixes("book.txt", no_suffixes).is_err());
        assert!(StorageFile::with_suffixes("book.json", &["txt", "json"]).is_ok());
    }

    #[test]
    fn test_multi_dot_suffix() {
        assert!(StorageFile::with_suffixes("dir/book.tar.gz", &["tar.gz"]).is_ok());
        assert!(StorageFile::with_suffixes("dir/book.gz", &["tar.gz"]).is_err());
        assert!(StorageFile::with_suffixes("dir/.tar.gz", &["tar.gz"]).is_err());
        assert!(StorageFile::with_suffixes("dir/booktar.gz", &["tar.gz"]).is_err());
        assert!(StorageFile::with_suffixes("dir/book.tar.gz", &["gz"]).is_ok());
        assert!(StorageFile::with_suffixes("dir/book.txt", &[""]).is_err());
    }

    #[test]
    fn test_construction_does_not_touch_filesystem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/nested/book.txt");
        let store = StorageFile::new(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_creates_parent_dirs_and_leaves_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/book.txt");
        let store = StorageFile::new(&path).unwrap();

        store.save(&sample_registry()).unwrap();
        assert!(path.exists());
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_save_replaces_whole_file() {
        let dir = TempDir::new().unwrap();
        let store = StorageFile::new(dir.path().join("book.txt")).unwrap();

        store.save(&sample_registry()).unwrap();
        store.save(&Registry::new()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "{\n  \"contacts\": []\n}\n");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = StorageFile::new(dir.path().join("absent.txt")).unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, StorageError::Operation { .. }));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_save_into_unwritable_location_is_io_error() {
        let dir = TempDir::new().unwrap();
        // a regular file standing where the parent directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let store = StorageFile::new(blocker.join("book.txt")).unwrap();

        let err = store.save(&Registry::new()).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }
}
