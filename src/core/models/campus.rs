//! Campus model

use crate::core::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Campus a student is registered at
///
/// Data files accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Campus {
    /// Christchurch campus
    Christchurch,
    /// Auckland campus
    Auckland,
    /// Wellington campus
    Wellington,
}

impl Campus {
    /// Every supported campus, in display order
    pub const ALL: [Self; 3] = [Self::Christchurch, Self::Auckland, Self::Wellington];

    /// Campus name as stored in data files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Christchurch => "Christchurch",
            Self::Auckland => "Auckland",
            Self::Wellington => "Wellington",
        }
    }
}

impl FromStr for Campus {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|campus| campus.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PortalError::InvalidCampus(s.to_string()))
    }
}

impl TryFrom<String> for Campus {
    type Error = PortalError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("auckland".parse::<Campus>().unwrap(), Campus::Auckland);
        assert_eq!("WELLINGTON".parse::<Campus>().unwrap(), Campus::Wellington);
        assert_eq!(
            "  Christchurch ".parse::<Campus>().unwrap(),
            Campus::Christchurch
        );
    }

    #[test]
    fn test_parse_rejects_unknown_campus() {
        let err = "Dunedin".parse::<Campus>().unwrap_err();
        assert!(matches!(err, PortalError::InvalidCampus(ref name) if name == "Dunedin"));
    }

    #[test]
    fn test_serialized_name_matches_display() {
        let json = serde_json::to_string(&Campus::Wellington).unwrap();
        assert_eq!(json, "\"Wellington\"");
        assert_eq!(Campus::Wellington.to_string(), "Wellington");
    }

    #[test]
    fn test_deserialize_accepts_any_case() {
        let campuses: Vec<Campus> =
            serde_json::from_str(r#"["auckland", " WELLINGTON", "Christchurch"]"#).unwrap();
        assert_eq!(
            campuses,
            vec![Campus::Auckland, Campus::Wellington, Campus::Christchurch]
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_campus() {
        let err = serde_json::from_str::<Campus>(r#""Dunedin""#).unwrap_err();
        assert!(err.to_string().contains("Dunedin"));
    }
}
