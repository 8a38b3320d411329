//! Whole-file JSON persistence for student records and the course catalog
//!
//! Both files are read in full at startup and overwritten in full after each
//! change. There is no incremental or transactional write.

use crate::core::error::{PortalError, Result};
use crate::core::models::StudentRecord;
use crate::core::store::RecordStore;
use crate::core::teaching::Catalog;
use crate::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// JSON file holding the list of student records
#[derive(Debug, Clone)]
pub struct StudentFile {
    path: PathBuf,
}

impl StudentFile {
    /// Bind to a file path; nothing is read until [`load`](Self::load)
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record into a new store
    ///
    /// A missing file is an empty store, not an error.
    ///
    /// # Errors
    /// Returns `PortalError::Io` if the file exists but cannot be read, or
    /// `PortalError::Json` if its contents are not a list of students.
    pub fn load(&self) -> Result<RecordStore> {
        let records: Vec<StudentRecord> = read_json(&self.path)?.unwrap_or_default();
        info!(
            "Loaded {} student record(s) from {}",
            records.len(),
            self.path.display()
        );
        Ok(RecordStore::from_records(records))
    }

    /// Overwrite the file with the store's records in their current order
    ///
    /// # Errors
    /// Returns `PortalError::Io` if the directory or file cannot be written.
    /// The store itself is never modified.
    pub fn save(&self, store: &RecordStore) -> Result<()> {
        write_json(&self.path, store.records())?;
        debug!(
            "Saved {} student record(s) to {}",
            store.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// JSON file holding the course and teacher catalog
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    /// Bind to a file path
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog, falling back to [`Catalog::seeded`] when the file is missing
    ///
    /// # Errors
    /// Returns `PortalError::Io` or `PortalError::Json` if an existing file
    /// cannot be read or decoded.
    pub fn load(&self) -> Result<Catalog> {
        match read_json(&self.path)? {
            Some(catalog) => Ok(catalog),
            None => {
                info!(
                    "No catalog at {}; using the default course list",
                    self.path.display()
                );
                Ok(Catalog::seeded())
            }
        }
    }

    /// Overwrite the file with the catalog
    ///
    /// # Errors
    /// Returns `PortalError::Io` if the directory or file cannot be written.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        write_json(&self.path, catalog)
    }
}

/// Read and decode a JSON file, `Ok(None)` if it does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PortalError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| PortalError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode a value as pretty JSON and overwrite `path`, creating parent directories
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| PortalError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let io_err = |source: std::io::Error| PortalError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, json).map_err(io_err)
}
