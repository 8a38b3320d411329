//! Command-line interface entry point for the student portal

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::Context;
use student_portal::config::Config;
use student_portal::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use student_portal::{debug, error, info};

fn main() {
    let args = Cli::parse();

    // CLI overrides go into a per-run copy; `stored` is what `config set` saves
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    init_logging(&args, &config);
    debug!(
        "Using students file {} and catalog file {}",
        config.paths.students_file, config.paths.catalog_file
    );

    let ctx = Context::from_config(&config);
    let outcome = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut stored, &defaults),
        Command::Student { action } => {
            commands::student::run(action, &ctx).map_err(|e| e.to_string())
        }
        Command::Course { action } => {
            commands::course::run(action, &ctx).map_err(|e| e.to_string())
        }
        Command::Teacher { action } => {
            commands::teacher::run(action, &ctx).map_err(|e| e.to_string())
        }
        Command::Announce { message, course } => {
            commands::announce::run(&message, course.as_deref(), &ctx).map_err(|e| e.to_string())
        }
    };

    if let Err(e) = outcome {
        error!("{e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Apply level, verbose, and file settings: CLI flags win over config values
fn init_logging(args: &Cli, config: &Config) {
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }
}
