#![allow(dead_code)]

use assert_cmd::Command;
use contact_book::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Book {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl Book {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(".instance").join("local_storage.json");
        Ok(Self { dir, path })
    }

    /// Store contacts through the library and hand back what was stored.
    pub fn seed(&self, drafts: &[(&str, &str, &str)]) -> Result<Vec<Contact>, AppError> {
        let mut store = self.open()?;
        for (name, email, phone) in drafts {
            store.add(ContactDraft::new(*name, *email, *phone))?;
        }
        Ok(store.list().to_vec())
    }

    pub fn open(&self) -> Result<ContactStore, AppError> {
        ContactStore::load(Box::new(FileStorage::new(&self.path)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The binary, pointed at this book's storage file.
    pub fn command(&self) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
        cmd.env("STORAGE_CHOICE", "file")
            .env("STORAGE_PATH", &self.path)
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    /// Run the binary with `script` on stdin and return stdout.
    pub fn session(&self, script: &str) -> Result<String, Box<dyn std::error::Error>> {
        let output = self
            .command()?
            .write_stdin(script.to_string())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        Ok(String::from_utf8(output)?)
    }
}
