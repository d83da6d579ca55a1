//! Key/value preference storage.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::project_dirs;
use crate::error::Error;

/// A string key/value store for user preferences.
///
/// Callers treat every failure as best effort: a failed read behaves like a
/// missing key and a failed write is dropped.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }
}

/// Preferences kept in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Preferences kept as a flat TOML table of strings.
///
/// The file is re-read on every access so edits made by other processes are
/// picked up; the last write wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Backing file, `None` when the platform has no home directory.
    path: Option<PathBuf>,
}

impl FileStore {
    /// Store backed by `path`. Parent directories are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store at `<data_local_dir>/preferences.toml`.
    ///
    /// Without a home directory the store exists but every operation fails
    /// with [`Error::Unavailable`].
    pub fn open_default() -> Self {
        Self {
            path: project_dirs().map(|dirs| dirs.data_local_dir().join("preferences.toml")),
        }
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read_table(path: &Path) -> Result<BTreeMap<String, String>, Error> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path.as_deref().ok_or(Error::Unavailable)?;
        Ok(Self::read_table(path)?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path.as_deref().ok_or(Error::Unavailable)?;

        // Corrupt files are overwritten.
        let mut table = Self::read_table(path).unwrap_or_else(|err| {
            log::debug!("discarding unreadable preferences: {err}");
            BTreeMap::new()
        });
        table.insert(key.to_owned(), value.to_owned());
        let contents = toml::to_string(&table)?;

        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, contents).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("petalsEnabled").unwrap(), None);
        store.set("petalsEnabled", "false").unwrap();
        assert_eq!(store.get("petalsEnabled").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");
        let mut store = FileStore::new(&path);

        assert_eq!(store.get("petalsEnabled").unwrap(), None);
        store.set("petalsEnabled", "true").unwrap();
        store.set("other", "value").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("petalsEnabled").unwrap().as_deref(), Some("true"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_reports_corrupt_file_and_recovers_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "this is [not toml").unwrap();
        let mut store = FileStore::new(&path);

        assert!(matches!(store.get("petalsEnabled"), Err(Error::Parse { .. })));
        store.set("petalsEnabled", "false").unwrap();
        assert_eq!(store.get("petalsEnabled").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_file_store_without_path_is_unavailable() {
        let mut store = FileStore { path: None };
        assert!(matches!(store.get("petalsEnabled"), Err(Error::Unavailable)));
        assert!(matches!(store.set("petalsEnabled", "true"), Err(Error::Unavailable)));
    }
}
