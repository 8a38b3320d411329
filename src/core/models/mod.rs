//! Data models for the student portal

pub mod campus;
pub mod course;
pub mod student;
pub mod teacher;

pub use campus::Campus;
pub use course::Course;
pub use student::StudentRecord;
pub use teacher::Teacher;
