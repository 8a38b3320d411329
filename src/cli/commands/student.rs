//! Student command handler

use super::Context;
use crate::args::StudentCommand;
use student_portal::core::models::StudentRecord;
use student_portal::core::store::SortKey;
use student_portal::core::Result;
use student_portal::{info, verbose};

/// Dispatch student subcommands
///
/// # Errors
/// Returns an error if a data file cannot be read or written, or if an add
/// collides with an existing id.
pub fn run(action: StudentCommand, ctx: &Context) -> Result<()> {
    match action {
        StudentCommand::Add {
            first_name,
            last_name,
            email,
            campus,
            id,
        } => add(ctx, StudentRecord::new(first_name, last_name, email, campus, id)),
        StudentCommand::Delete { id } => delete(ctx, &id),
        StudentCommand::List { by } => list(ctx, by),
        StudentCommand::Search { by, value, sorted } => search(ctx, by, &value, sorted),
    }
}

fn add(ctx: &Context, record: StudentRecord) -> Result<()> {
    let mut store = ctx.students.load()?;
    let line = record.to_string();
    store.insert_unique(record)?;
    ctx.students.save(&store)?;
    info!("Added student: {line}");
    println!("✓ Record added: {line}");
    Ok(())
}

fn delete(ctx: &Context, id: &str) -> Result<()> {
    let mut store = ctx.students.load()?;
    if store.delete(id) == 0 {
        println!("✗ No student found with ID {id}");
        return Ok(());
    }
    ctx.students.save(&store)?;
    println!("✓ Student with ID {id} has been deleted");
    Ok(())
}

fn list(ctx: &Context, by: SortKey) -> Result<()> {
    let mut store = ctx.students.load()?;
    let students = store.sort_by(by);
    if students.is_empty() {
        println!("No students found.");
        return Ok(());
    }

    println!("\n=== {} students by {by} ===\n", ctx.institution);
    for student in students {
        println!("{student}");
    }
    verbose!("\n{} record(s) listed", students.len());
    Ok(())
}

fn search(ctx: &Context, by: SortKey, value: &str, sorted: bool) -> Result<()> {
    let mut store = ctx.students.load()?;
    let found: Vec<&StudentRecord> = if sorted {
        store.search_sorted(by, value).into_iter().collect()
    } else {
        store.search_exact(by, value)
    };

    verbose!("{} match(es) for {by} = {value}", found.len());
    if found.is_empty() {
        println!("No students found.");
    } else {
        for student in found {
            println!("{student}");
        }
    }
    Ok(())
}
