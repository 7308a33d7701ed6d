use super::*;

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/local_storage.json";

/// Storage area kept on disk as a single JSON object of `key -> string value`.
///
/// The whole object is read on every access and rewritten on every
/// `set_item`, so other keys in the same file are preserved.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// An unreadable area counts as empty; the next `set_item` replaces it.
    fn read_area(&self) -> Result<BTreeMap<String, String>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(BTreeMap::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&data) {
            Ok(area) => Ok(area),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "storage file is malformed, treating it as empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut area = self.read_area()?;
        Ok(area.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let mut area = self.read_area()?;
        area.insert(key.to_string(), value.to_string());

        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = serde_json::to_string_pretty(&area)?;
        file.write_all(data.as_bytes())?;

        debug!(path = %self.path.display(), key, bytes = value.len(), "storage item written");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "file"
    }
}
