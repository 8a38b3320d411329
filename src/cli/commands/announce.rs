//! Announce command handler

use super::Context;
use student_portal::core::Result;

/// Send an announcement to one course, or through every assigned teacher
///
/// # Errors
/// Returns an error if a data file cannot be read or the course is unknown.
pub fn run(message: &str, course: Option<&str>, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog.load()?;
    let store = ctx.students.load()?;

    if let Some(code) = course {
        let sent = catalog.notify_students(&store, code, message)?;
        for notification in &sent {
            println!("{notification}");
        }
        println!("✓ Notified {} student(s) in {code}", sent.len());
        return Ok(());
    }

    let announcements = catalog.notify_teachers(&store, message);
    if announcements.is_empty() {
        println!("No teachers are assigned to a course.");
    }
    for announcement in announcements {
        println!(
            "Announcement from {} to {}: {}",
            announcement.teacher, announcement.course_code, announcement.message
        );
        for notification in &announcement.notifications {
            println!("  {notification}");
        }
    }
    Ok(())
}
