//! Teacher command handler

use super::Context;
use crate::args::TeacherCommand;
use student_portal::core::models::Teacher;
use student_portal::core::Result;

/// Dispatch teacher subcommands
///
/// # Errors
/// Returns an error if the catalog file cannot be read or written.
pub fn run(action: TeacherCommand, ctx: &Context) -> Result<()> {
    let mut catalog = ctx.catalog.load()?;
    match action {
        TeacherCommand::List => {
            if catalog.teachers.is_empty() {
                println!("No teachers registered.");
            }
            for teacher in &catalog.teachers {
                let course = teacher.course.as_deref().unwrap_or("no course");
                println!("{} - {course}", teacher.name);
            }
        }
        TeacherCommand::Add { name } => {
            if catalog.add_teacher(Teacher::new(name.clone())) {
                ctx.catalog.save(&catalog)?;
                println!("✓ Teacher added: {name}");
            } else {
                println!("✗ A teacher named {name} already exists");
            }
        }
    }
    Ok(())
}
