pub mod file;
pub mod memory;

use crate::prelude::AppError;
use std::fs;
use std::path::Path;

pub use file::FileStorage;
pub use memory::MemStorage;

/// A string-keyed, string-valued storage area, the way a browser's
/// `localStorage` behaves. Values are opaque to the backend.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMedium {
    File,
    Mem,
}

impl StorageMedium {
    pub fn is_file(&self) -> bool {
        matches!(self, StorageMedium::File)
    }

    pub fn is_which(&self) -> &str {
        if self.is_file() { "file" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(StorageMedium::File),
            "mem" | "memory" => Ok(StorageMedium::Mem),
            _ => Err(AppError::Validation(format!(
                "Not a recognized storage medium: '{str}'"
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMedium,
    path: &str,
) -> Result<Box<dyn KeyValueStorage>, AppError> {
    match medium {
        StorageMedium::File => Ok(Box::new(FileStorage::new(path))),
        StorageMedium::Mem => Ok(Box::new(MemStorage::new())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_medium() -> Result<(), AppError> {
        assert!(StorageMedium::from("file")?.is_file());
        assert!(StorageMedium::from("JSON")?.is_file());
        assert_eq!(StorageMedium::from(" mem ")?, StorageMedium::Mem);
        assert_eq!(StorageMedium::from("memory")?.is_which(), "mem");
        assert!(StorageMedium::from("txt").is_err());
        Ok(())
    }

    #[test]
    fn parse_storage_type_picks_backend() -> Result<(), AppError> {
        let mem = parse_storage_type(StorageMedium::Mem, "ignored.json")?;
        assert_eq!(mem.get_medium(), "mem");

        let file = parse_storage_type(StorageMedium::File, "./.instance/unused.json")?;
        assert_eq!(file.get_medium(), "file");
        Ok(())
    }

    #[test]
    fn creates_missing_parent_directories() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("deeper").join("store.json");

        create_file_parent(&path)?;

        assert!(path.parent().is_some_and(|p| p.is_dir()));
        Ok(())
    }
}
