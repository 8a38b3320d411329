//! CLI command handlers for the student portal.
//!
//! Each command group is implemented in its own submodule. Handlers load
//! the data files they need, call into the library, and save after any
//! change.

pub mod announce;
pub mod config;
pub mod course;
pub mod student;
pub mod teacher;

use student_portal::config::Config;
use student_portal::core::persistence::{CatalogFile, StudentFile};

/// Data files and display settings resolved from configuration
#[derive(Debug, Clone)]
pub struct Context {
    /// Student records file
    pub students: StudentFile,
    /// Course and teacher catalog file
    pub catalog: CatalogFile,
    /// Institution name for listing headers
    pub institution: String,
}

impl Context {
    /// Resolve file locations from the effective configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            students: StudentFile::new(&config.paths.students_file),
            catalog: CatalogFile::new(&config.paths.catalog_file),
            institution: config.portal.institution.clone(),
        }
    }
}
