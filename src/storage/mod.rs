// SPDX-License-Identifier: MPL-2.0
//! Small persistent key-value storage for user data.
//!
//! Values are strings (the callers store JSON). [`JsonFileStore`] keeps one
//! file per key below `<data_dir>/storage/`; [`MemoryStore`] is used by tests
//! and can be told to reject writes.

use crate::app::paths;
use crate::error::StorageError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key of the persisted favorites (JSON array of image records).
pub const FAVORITES_KEY: &str = "gallery_favorites";

/// Key of the persisted theme mode (`"light"`, `"dark"` or `"system"`).
pub const THEME_KEY: &str = "app_theme_preference";

/// Every key written by the application, used by "reset app".
pub const ALL_KEYS: [&str; 2] = [FAVORITES_KEY, THEME_KEY];

/// Result alias for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// String storage addressed by key.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// File-backed store: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Opens the store in the resolved data directory.
    ///
    /// Returns `None` when no data directory can be determined.
    pub fn open_default() -> Option<Self> {
        Self::open_with_override(None)
    }

    pub fn open_with_override(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_storage_dir_with_override(base_dir).map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read(format!("{}: {err}", path.display()))),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.dir)
            .map_err(|err| StorageError::Write(format!("{}: {err}", self.dir.display())))?;

        // Write beside the target, then rename, so a crash never leaves half a value.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|err| StorageError::Write(format!("{}: {err}", path.display())))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Write(format!("{}: {err}", path.display()))),
        }
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    read_only: Mutex<bool>,
    pinned: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with one value.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// When set, every `set`/`remove` fails with [`StorageError::Write`].
    pub fn set_read_only(&self, read_only: bool) {
        if let Ok(mut flag) = self.read_only.lock() {
            *flag = read_only;
        }
    }

    /// Makes every `remove` of `key` fail while other keys behave normally.
    pub fn pin(&self, key: &str) {
        if let Ok(mut pinned) = self.pinned.lock() {
            pinned.push(key.to_string());
        }
    }

    fn is_pinned(&self, key: &str) -> bool {
        self.pinned
            .lock()
            .map(|pinned| pinned.iter().any(|k| k == key))
            .unwrap_or(false)
    }

    fn is_read_only(&self) -> bool {
        self.read_only.lock().map(|flag| *flag).unwrap_or(false)
    }

    fn values(&self) -> StorageResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| StorageError::Read("memory store poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.is_read_only() {
            return Err(StorageError::Write(format!("{key}: store is read-only")));
        }
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if self.is_read_only() {
            return Err(StorageError::Write(format!("{key}: store is read-only")));
        }
        if self.is_pinned(key) {
            return Err(StorageError::Write(format!("{key}: cannot be removed")));
        }
        self.values()?.remove(key);
        Ok(())
    }
}

/// Result of [`clear_all`]: the keys actually removed and the first failure.
#[derive(Debug, Default)]
pub struct ClearOutcome {
    pub removed: Vec<&'static str>,
    pub error: Option<StorageError>,
}

impl ClearOutcome {
    pub fn was_removed(&self, key: &str) -> bool {
        self.removed.contains(&key)
    }

    pub fn into_result(self) -> StorageResult<()> {
        self.error.map_or(Ok(()), Err)
    }
}

/// Removes every application key.
///
/// A failing key does not stop the others from being removed.
pub fn clear_all(store: &dyn KeyValueStore) -> ClearOutcome {
    let mut outcome = ClearOutcome::default();
    for key in ALL_KEYS {
        match store.remove(key) {
            Ok(()) => outcome.removed.push(key),
            Err(err) => {
                log::warn!("Failed to remove stored {key}: {err}");
                outcome.error.get_or_insert(err);
            }
        }
    }
    outcome
}
