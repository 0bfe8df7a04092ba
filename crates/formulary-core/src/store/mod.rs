//! JSON file persistence for the formulary and inventory.

mod collection;
mod files;

pub use collection::*;
#[allow(unused_imports)]
pub use files::*;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name of the formulary collection inside the data directory.
pub const FORMULARY_FILE: &str = "formulary.json";

/// File name of the inventory collection inside the data directory.
pub const INVENTORY_FILE: &str = "inventory.json";

/// Persistence errors. Every variant is fatal to the session.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Malformed JSON in '{}' file.", path.display())]
    MalformedFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid '{}' file.", path.display())]
    InvalidFile { path: PathBuf },

    #[error("Could not encode '{}': {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Locations of the two backing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStore {
    formulary_path: PathBuf,
    inventory_path: PathBuf,
}

impl DataStore {
    /// Use `formulary.json` and `inventory.json` inside `data_dir`.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let dir = data_dir.as_ref();
        Self {
            formulary_path: dir.join(FORMULARY_FILE),
            inventory_path: dir.join(INVENTORY_FILE),
        }
    }

    pub fn formulary_path(&self) -> &Path {
        &self.formulary_path
    }

    pub fn inventory_path(&self) -> &Path {
        &self.inventory_path
    }
}
