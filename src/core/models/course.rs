//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a course offered by the college
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code used as its key (e.g., "CS102")
    pub code: String,

    /// Course title (e.g., "Computer Science")
    pub title: String,

    /// Name of the assigned teacher, if any
    #[serde(default)]
    pub teacher: Option<String>,
}

impl Course {
    /// Create a new course with no teacher assigned
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `title` - Course title
    #[must_use]
    pub const fn new(code: String, title: String) -> Self {
        Self {
            code,
            title,
            teacher: None,
        }
    }

    /// Assign a teacher by name, replacing any previous assignment
    pub fn assign_teacher(&mut self, teacher_name: String) {
        self.teacher = Some(teacher_name);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.code)
    }
}
