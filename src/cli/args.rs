//! CLI argument definitions for the student portal

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use student_portal::config::ConfigOverrides;
use student_portal::core::models::Campus;
use student_portal::core::store::SortKey;
use student_portal::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `students_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// Add a new student record.
    Add {
        /// Given name
        #[arg(long, value_name = "NAME")]
        first_name: String,
        /// Family name
        #[arg(long, value_name = "NAME")]
        last_name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Campus: Christchurch, Auckland, or Wellington
        #[arg(long)]
        campus: Campus,
        /// Explicit student id (generated from the names and year when omitted)
        #[arg(long)]
        id: Option<String>,
    },
    /// Delete every record with the given id.
    Delete {
        /// Student id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List all students in ascending order of a field.
    List {
        /// Field to sort by: id, first_name, last_name, campus
        #[arg(long, value_name = "FIELD", default_value = "id")]
        by: SortKey,
    },
    /// Search students by a field.
    ///
    /// Without --sorted, every exact match is listed. With --sorted the
    /// records are sorted by the field and binary-searched, returning at most
    /// one match.
    Search {
        /// Field to search: id, first_name, last_name, campus
        #[arg(long, value_name = "FIELD")]
        by: SortKey,
        /// Value to match exactly
        #[arg(value_name = "VALUE")]
        value: String,
        /// Use binary search over the sorted records
        #[arg(long)]
        sorted: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// List all courses.
    List,
    /// Show a course with its teacher and enrolled students.
    Show {
        /// Course code (e.g., CS102)
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Add a course to the catalog.
    Add {
        /// Course code (e.g., BIO105)
        #[arg(value_name = "CODE")]
        code: String,
        /// Course title
        #[arg(value_name = "TITLE")]
        title: String,
    },
    /// Enroll a student in a course.
    Enroll {
        /// Student id
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Assign a teacher to a course.
    Assign {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Teacher name
        #[arg(value_name = "TEACHER")]
        teacher: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeacherCommand {
    /// List all teachers and their courses.
    List,
    /// Add a teacher to the catalog.
    Add {
        /// Teacher name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Add, delete, list, and search student records.
    Student {
        #[command(subcommand)]
        action: StudentCommand,
    },
    /// Manage courses and enrollment.
    Course {
        #[command(subcommand)]
        action: CourseCommand,
    },
    /// Manage teachers.
    Teacher {
        #[command(subcommand)]
        action: TeacherCommand,
    },
    /// Send an announcement.
    ///
    /// With --course, notifies every student enrolled in that course.
    /// Otherwise every teacher with a course announces to their students.
    Announce {
        /// Message to send
        #[arg(value_name = "MESSAGE")]
        message: String,
        /// Limit the announcement to one course
        #[arg(long, value_name = "CODE")]
        course: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studentportal",
    about = "Student portal command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Use this student records file instead of the configured one
    #[arg(long = "students-file", value_name = "PATH")]
    pub students_file: Option<PathBuf>,

    /// Use this catalog file instead of the configured one
    #[arg(long = "catalog-file", value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            students_file: self
                .students_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            catalog_file: self
                .catalog_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            students_file: None,
            catalog_file: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.students_file.is_none());
        assert!(overrides.catalog_file.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.students_file = Some(PathBuf::from("/data/students.json"));
        cli.catalog_file = Some(PathBuf::from("/data/catalog.json"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(
            overrides.students_file,
            Some("/data/students.json".to_string())
        );
        assert_eq!(overrides.catalog_file, Some("/data/catalog.json".to_string()));
    }

    #[test]
    fn test_parse_student_search() {
        let cli = Cli::try_parse_from([
            "studentportal",
            "student",
            "search",
            "--by",
            "first_name",
            "Roshni",
            "--sorted",
        ])
        .unwrap();

        match cli.command {
            Command::Student {
                action: StudentCommand::Search { by, value, sorted },
            } => {
                assert_eq!(by, SortKey::FirstName);
                assert_eq!(value, "Roshni");
                assert!(sorted);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_sort_field() {
        let result = Cli::try_parse_from(["studentportal", "student", "list", "--by", "email"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_student_add_campus_case_insensitive() {
        let cli = Cli::try_parse_from([
            "studentportal",
            "student",
            "add",
            "--first-name",
            "Ahmed",
            "--last-name",
            "Gala",
            "--email",
            "ahmed@example.com",
            "--campus",
            "wellington",
        ])
        .unwrap();

        match cli.command {
            Command::Student {
                action: StudentCommand::Add { campus, id, .. },
            } => {
                assert_eq!(campus, Campus::Wellington);
                assert!(id.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_defaults_to_id() {
        let cli = Cli::try_parse_from(["studentportal", "student", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Student {
                action: StudentCommand::List { by: SortKey::Id }
            }
        ));
    }
}
