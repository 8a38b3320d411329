//! Course catalog, teacher assignment, enrollment, and announcements
//!
//! Enrollment lives on the student records themselves; a course roster is
//! derived from the record store on demand rather than stored twice.

use crate::core::error::{PortalError, Result};
use crate::core::models::{Course, StudentRecord, Teacher};
use crate::core::store::RecordStore;
use crate::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Courses offered when no catalog file exists yet, as (code, title)
const DEFAULT_COURSES: [(&str, &str); 4] = [
    ("MTH101", "Mathematics"),
    ("CS102", "Computer Science"),
    ("PHY103", "Physics"),
    ("CHE104", "Chemistry"),
];

/// Courses and teachers known to the portal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Courses in the order they were added
    #[serde(default)]
    pub courses: Vec<Course>,

    /// Teachers in the order they were added
    #[serde(default)]
    pub teachers: Vec<Teacher>,
}

/// A message delivered to one student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Recipient's student id
    pub student_id: String,
    /// Recipient's full name
    pub student_name: String,
    /// Message body
    pub message: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification for {}: {}", self.student_name, self.message)
    }
}

/// A teacher's announcement to everyone enrolled in their course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Announcing teacher
    pub teacher: String,
    /// Course the announcement went to
    pub course_code: String,
    /// Message body
    pub message: String,
    /// One notification per enrolled student
    pub notifications: Vec<Notification>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
            teachers: Vec::new(),
        }
    }

    /// Catalog holding the default course list and no teachers
    #[must_use]
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (code, title) in DEFAULT_COURSES {
            catalog.add_course(Course::new(code.to_string(), title.to_string()));
        }
        catalog
    }

    /// Add a course
    ///
    /// # Returns
    /// `true` if added, `false` if a course with that code already exists
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.course(&course.code).is_some() {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Add a teacher
    ///
    /// # Returns
    /// `true` if added, `false` if a teacher with that name already exists
    pub fn add_teacher(&mut self, teacher: Teacher) -> bool {
        if self.teacher(&teacher.name).is_some() {
            return false;
        }
        self.teachers.push(teacher);
        true
    }

    /// Look up a course by code
    #[must_use]
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Look up a teacher by name
    #[must_use]
    pub fn teacher(&self, name: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.name == name)
    }

    /// Make `teacher_name` responsible for `course_code`
    ///
    /// Updates both the course and the teacher. A course has one teacher, so
    /// a teacher previously on the course is left without one.
    ///
    /// # Errors
    /// Returns `PortalError::UnknownCourse` or `PortalError::UnknownTeacher`
    /// if either side is missing; nothing is changed in that case.
    pub fn assign_teacher(&mut self, course_code: &str, teacher_name: &str) -> Result<()> {
        let course_idx = self
            .courses
            .iter()
            .position(|c| c.code == course_code)
            .ok_or_else(|| PortalError::UnknownCourse(course_code.to_string()))?;
        let teacher_idx = self
            .teachers
            .iter()
            .position(|t| t.name == teacher_name)
            .ok_or_else(|| PortalError::UnknownTeacher(teacher_name.to_string()))?;

        if let Some(previous) = self.courses[course_idx].teacher.take() {
            if let Some(prev) = self.teachers.iter_mut().find(|t| t.name == previous) {
                prev.course = None;
            }
        }
        // A teacher runs one course; release the old one
        if let Some(old_code) = self.teachers[teacher_idx].course.take() {
            if let Some(old) = self.courses.iter_mut().find(|c| c.code == old_code) {
                old.teacher = None;
            }
        }
        self.courses[course_idx].assign_teacher(teacher_name.to_string());
        self.teachers[teacher_idx].assign_course(course_code.to_string());
        info!("Assigned {teacher_name} to {course_code}");
        Ok(())
    }

    /// Enroll a stored student in a catalog course
    ///
    /// # Returns
    /// `true` if newly enrolled, `false` if already enrolled
    ///
    /// # Errors
    /// Returns `PortalError::UnknownCourse` if the course is not in the
    /// catalog, or `PortalError::UnknownStudent` if the student is not stored.
    pub fn enroll(
        &self,
        store: &mut RecordStore,
        student_id: &str,
        course_code: &str,
    ) -> Result<bool> {
        if self.course(course_code).is_none() {
            return Err(PortalError::UnknownCourse(course_code.to_string()));
        }
        let added = store.enroll(student_id, course_code)?;
        if added {
            info!("Enrolled {student_id} in {course_code}");
        }
        Ok(added)
    }

    /// Students enrolled in a course, in store order
    #[must_use]
    pub fn roster<'a>(&self, store: &'a RecordStore, course_code: &str) -> Vec<&'a StudentRecord> {
        store
            .iter()
            .filter(|s| s.enrolled_courses.iter().any(|c| c == course_code))
            .collect()
    }

    /// Send a message to every student enrolled in a course
    ///
    /// # Errors
    /// Returns `PortalError::UnknownCourse` if the course is not in the catalog.
    pub fn notify_students(
        &self,
        store: &RecordStore,
        course_code: &str,
        message: &str,
    ) -> Result<Vec<Notification>> {
        if self.course(course_code).is_none() {
            return Err(PortalError::UnknownCourse(course_code.to_string()));
        }
        Ok(self
            .roster(store, course_code)
            .into_iter()
            .map(|student| Notification {
                student_id: student.id().to_string(),
                student_name: student.full_name(),
                message: message.to_string(),
            })
            .collect())
    }

    /// Have every teacher with a course announce `message` to that course
    ///
    /// Teachers without a course are skipped, as are teachers whose course is
    /// missing from the catalog (logged as a warning).
    #[must_use]
    pub fn notify_teachers(&self, store: &RecordStore, message: &str) -> Vec<Announcement> {
        self.teachers
            .iter()
            .filter_map(|teacher| {
                let code = teacher.course.as_deref()?;
                let notifications = match self.notify_students(store, code, message) {
                    Ok(notifications) => notifications,
                    Err(e) => {
                        warn!("Skipping announcement from {}: {e}", teacher.name);
                        return None;
                    }
                };
                Some(Announcement {
                    teacher: teacher.name.clone(),
                    course_code: code.to_string(),
                    message: message.to_string(),
                    notifications,
                })
            })
            .collect()
    }
}
