//! Error types for the student portal core

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the core
pub type Result<T> = std::result::Result<T, PortalError>;

/// Errors reported by the record store, teaching module, and persistence layer
#[derive(Debug, Error)]
pub enum PortalError {
    /// A sort or search was requested on a field the store does not know
    #[error("invalid field '{0}' (expected one of: id, first_name, last_name, campus)")]
    InvalidField(String),

    /// Campus name outside the supported set
    #[error("invalid campus '{0}' (expected one of: Christchurch, Auckland, Wellington)")]
    InvalidCampus(String),

    /// A record with the same id is already stored
    #[error("a student with id '{0}' already exists")]
    DuplicateId(String),

    /// No student record carries the given id
    #[error("no student found with id '{0}'")]
    UnknownStudent(String),

    /// No course in the catalog has the given code
    #[error("no course found with code '{0}'")]
    UnknownCourse(String),

    /// No teacher in the catalog has the given name
    #[error("no teacher found named '{0}'")]
    UnknownTeacher(String),

    /// Reading or writing a data file failed
    #[error("failed to access {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A data file held malformed JSON, or a value could not be encoded
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// File being decoded or encoded
        path: PathBuf,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}
