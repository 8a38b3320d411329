//! Student record model

use super::Campus;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading characters taken from each name part when deriving an id
const ID_NAME_CHARS: usize = 3;

/// A single student record
///
/// The `id` is fixed at construction. Other attributes are public, but the
/// record store only hands out shared references so stored records change
/// through [`StudentRecord::add_course`] alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredStudent")]
pub struct StudentRecord {
    /// Given name (e.g., "Roshni")
    pub first_name: String,

    /// Family name (e.g., "Khan")
    pub last_name: String,

    /// Contact email address
    pub email: String,

    /// Campus the student attends
    pub campus: Campus,

    id: String,

    /// Enrolled course codes in enrollment order (e.g., "CS102")
    pub enrolled_courses: Vec<String>,
}

/// On-disk shape of a student; `id` and `enrolled_courses` may be absent
#[derive(Deserialize)]
struct StoredStudent {
    first_name: String,
    last_name: String,
    email: String,
    campus: Campus,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    enrolled_courses: Vec<String>,
}

impl From<StoredStudent> for StudentRecord {
    fn from(stored: StoredStudent) -> Self {
        let mut record = Self::new(
            stored.first_name,
            stored.last_name,
            stored.email,
            stored.campus,
            stored.id,
        );
        record.enrolled_courses = stored.enrolled_courses;
        record
    }
}

impl StudentRecord {
    /// Create a new student record
    ///
    /// When `id` is `None` or blank, one is derived from the names and the
    /// current year (see [`StudentRecord::generate_id`]).
    ///
    /// # Arguments
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `email` - Contact email
    /// * `campus` - Campus
    /// * `id` - Explicit id, if one was supplied
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        campus: Campus,
        id: Option<String>,
    ) -> Self {
        let id = match id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Self::generate_id(&first_name, &last_name, chrono::Local::now().year()),
        };
        Self {
            first_name,
            last_name,
            email,
            campus,
            id,
            enrolled_courses: Vec::new(),
        }
    }

    /// Derive an id from the first three characters of each name plus a year
    ///
    /// Two students whose truncated names match and who enroll in the same
    /// year get the same id; callers that need uniqueness must check the store.
    ///
    /// # Examples
    /// ```
    /// use student_portal::core::models::StudentRecord;
    /// assert_eq!(StudentRecord::generate_id("Roshni", "Khan", 2024), "RosKha2024");
    /// ```
    #[must_use]
    pub fn generate_id(first_name: &str, last_name: &str, year: i32) -> String {
        let first: String = first_name.chars().take(ID_NAME_CHARS).collect();
        let last: String = last_name.chars().take(ID_NAME_CHARS).collect();
        format!("{first}{last}{year}")
    }

    /// Student id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record enrollment in a course
    ///
    /// # Returns
    /// `true` if the course was added, `false` if already enrolled
    pub fn add_course(&mut self, course_code: String) -> bool {
        if self.enrolled_courses.contains(&course_code) {
            false
        } else {
            self.enrolled_courses.push(course_code);
            true
        }
    }

    /// Full display name ("First Last")
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {} - {} - {}",
            self.id, self.first_name, self.last_name, self.email, self.campus
        )
    }
}
