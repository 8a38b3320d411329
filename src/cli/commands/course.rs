//! Course command handler

use super::Context;
use crate::args::CourseCommand;
use student_portal::core::models::Course;
use student_portal::core::Result;

/// Dispatch course subcommands
///
/// # Errors
/// Returns an error if a data file cannot be read or written, or if a course,
/// student, or teacher named on the command line does not exist.
pub fn run(action: CourseCommand, ctx: &Context) -> Result<()> {
    match action {
        CourseCommand::List => list(ctx),
        CourseCommand::Show { code } => show(ctx, &code),
        CourseCommand::Add { code, title } => add(ctx, code, title),
        CourseCommand::Enroll { student_id, code } => enroll(ctx, &student_id, &code),
        CourseCommand::Assign { code, teacher } => assign(ctx, &code, &teacher),
    }
}

fn list(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog.load()?;
    if catalog.courses.is_empty() {
        println!("No courses available.");
        return Ok(());
    }

    println!("Available Courses:");
    for (i, course) in catalog.courses.iter().enumerate() {
        match &course.teacher {
            Some(teacher) => println!("{}. {course} ({teacher})", i + 1),
            None => println!("{}. {course}", i + 1),
        }
    }
    Ok(())
}

fn show(ctx: &Context, code: &str) -> Result<()> {
    let catalog = ctx.catalog.load()?;
    let store = ctx.students.load()?;
    let Some(course) = catalog.course(code) else {
        println!("✗ No course found with code {code}");
        return Ok(());
    };

    println!("Course: {course}");
    match &course.teacher {
        Some(teacher) => println!("Teacher: {teacher}"),
        None => println!("No teacher assigned."),
    }

    let roster = catalog.roster(&store, code);
    if roster.is_empty() {
        println!("No students enrolled.");
    } else {
        println!("Enrolled Students:");
        for student in roster {
            println!(" - {}", student.full_name());
        }
    }
    Ok(())
}

fn add(ctx: &Context, code: String, title: String) -> Result<()> {
    let mut catalog = ctx.catalog.load()?;
    let course = Course::new(code, title);
    let line = course.to_string();
    if !catalog.add_course(course) {
        println!("✗ A course with that code already exists");
        return Ok(());
    }
    ctx.catalog.save(&catalog)?;
    println!("✓ Course added: {line}");
    Ok(())
}

fn enroll(ctx: &Context, student_id: &str, code: &str) -> Result<()> {
    let catalog = ctx.catalog.load()?;
    let mut store = ctx.students.load()?;
    if catalog.enroll(&mut store, student_id, code)? {
        ctx.students.save(&store)?;
        println!("✓ {student_id} has been enrolled in {code}");
    } else {
        println!("{student_id} is already enrolled in {code}");
    }
    Ok(())
}

fn assign(ctx: &Context, code: &str, teacher: &str) -> Result<()> {
    let mut catalog = ctx.catalog.load()?;
    catalog.assign_teacher(code, teacher)?;
    ctx.catalog.save(&catalog)?;
    println!("✓ {teacher} now teaches {code}");
    Ok(())
}
