//! File-backed storage: one JSON file per key under the data directory.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use super::{StorageBackend, StorageError};

/// Durable key-value storage on the local filesystem.
///
/// Each key maps to `<data_dir>/<key>.json`. Writes go through a
/// temporary file and a rename so a crash mid-write never leaves a
/// half-written value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir`. The directory is created on
    /// first write.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };

        fs::create_dir_all(&self.data_dir).map_err(write_err)?;

        let target = self.path_for(key);
        let tmp = self.data_dir.join(format!("{key}.json.tmp"));
        {
            let mut file = fs::File::create(&tmp).map_err(write_err)?;
            file.write_all(value.as_bytes()).map_err(write_err)?;
            file.sync_all().map_err(write_err)?;
        }
        fs::rename(&tmp, &target).map_err(write_err)?;
        Ok(())
    }
}
