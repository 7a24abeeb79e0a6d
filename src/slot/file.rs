//! File-backed slot store.
//!
//! Each key maps to `<dir>/<key>.json`. A save writes `<key>.json.tmp`,
//! fsyncs it, renames it over the target and fsyncs the directory, so a
//! load never observes a half-written blob.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::errors::{SlotError, SlotResult};
use super::{validate_key, SlotStore};

const SLOT_EXTENSION: &str = "json";

/// Slot store keeping one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Opens the store rooted at `dir`, creating the directory if missing.
    pub fn open(dir: impl AsRef<Path>) -> SlotResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| SlotError::Write {
            key: dir.display().to_string(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, SLOT_EXTENSION))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}.tmp", key, SLOT_EXTENSION))
    }
}

impl SlotStore for FileSlotStore {
    fn load(&self, key: &str) -> SlotResult<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SlotError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> SlotResult<()> {
        validate_key(key)?;
        let write_err = |source: std::io::Error| SlotError::Write {
            key: key.to_string(),
            source,
        };

        let tmp = self.temp_path(key);
        {
            let mut file = File::create(&tmp).map_err(write_err)?;
            file.write_all(value.as_bytes()).map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }
        fs::rename(&tmp, self.slot_path(key)).map_err(write_err)?;
        fsync_dir(&self.dir).map_err(write_err)
    }

    fn remove(&mut self, key: &str) -> SlotResult<()> {
        validate_key(key)?;
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(SlotError::Write {
                    key: key.to_string(),
                    source: e,
                })
            }
        }
        fsync_dir(&self.dir).map_err(|e| SlotError::Write {
            key: key.to_string(),
            source: e,
        })
    }
}

#[cfg(unix)]
fn fsync_dir(path: &Path) -> std::io::Result<()> {
    OpenOptions::new().read(true).open(path)?.sync_all()
}

#[cfg(not(unix))]
fn fsync_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileSlotStore::open(dir.path()).unwrap();
        assert!(store.load("inventory_items").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut store = FileSlotStore::open(dir.path()).unwrap();

        store.save("inventory_items", "[1,2]").unwrap();
        store.save("inventory_items", "[3]").unwrap();

        assert_eq!(store.load("inventory_items").unwrap().as_deref(), Some("[3]"));
        assert!(!dir.path().join("inventory_items.json.tmp").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = FileSlotStore::open(dir.path()).unwrap();

        store.save("k", "[]").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.load("k").unwrap().is_none());
    }

    #[test]
    fn test_open_creates_nested_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        let store = FileSlotStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let mut store = FileSlotStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.save("../escape", "[]"),
            Err(SlotError::InvalidKey(_))
        ));
    }
}
