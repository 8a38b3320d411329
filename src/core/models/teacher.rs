//! Teacher model

use serde::{Deserialize, Serialize};

/// A teacher, optionally responsible for one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Teacher name, unique within the catalog
    pub name: String,

    /// Code of the course the teacher runs
    #[serde(default)]
    pub course: Option<String>,
}

impl Teacher {
    /// Create a teacher with no course
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self { name, course: None }
    }

    /// Set the course this teacher runs
    pub fn assign_course(&mut self, course_code: String) {
        self.course = Some(course_code);
    }
}
