//! Fields the record store can sort and search by

use crate::core::error::{PortalError, Result};
use crate::core::models::StudentRecord;
use std::fmt;
use std::str::FromStr;

/// A sortable, searchable student field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Student id
    Id,
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Campus name
    Campus,
}

impl SortKey {
    /// Every key, in menu order
    pub const ALL: [Self; 4] = [Self::Id, Self::FirstName, Self::LastName, Self::Campus];

    /// Canonical field name (e.g., `first_name`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Campus => "campus",
        }
    }

    /// Read this field from a record
    ///
    /// Every field compares as a string, so campuses order alphabetically.
    #[must_use]
    pub fn value<'a>(&self, record: &'a StudentRecord) -> &'a str {
        match self {
            Self::Id => record.id(),
            Self::FirstName => &record.first_name,
            Self::LastName => &record.last_name,
            Self::Campus => record.campus.as_str(),
        }
    }
}

impl FromStr for SortKey {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "first_name" | "first-name" | "firstname" => Ok(Self::FirstName),
            "last_name" | "last-name" | "lastname" => Ok(Self::LastName),
            "campus" => Ok(Self::Campus),
            _ => Err(PortalError::InvalidField(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
