use super::*;
use std::collections::HashMap;

/// Volatile storage area. Everything is lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemStorage {
    data: HashMap<String, String>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
