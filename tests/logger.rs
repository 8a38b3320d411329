//! Integration tests for logger behavior.

use student_portal::logger::{set_level, set_level_from_str, Level};
use student_portal::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_aliases_in_any_case() {
    assert_eq!(Level::parse("ERR"), Some(Level::Error));
    assert_eq!(Level::parse("Warning"), Some(Level::Warn));
    assert_eq!(Level::parse("INFO"), Some(Level::Info));
    assert_eq!(Level::parse("debug"), Some(Level::Debug));
    assert_eq!(Level::parse("trace"), None);
    assert_eq!(Level::parse(""), None);
}

#[test]
fn set_level_from_str_follows_parse() {
    for name in ["error", "err", "warn", "warning", "info", "debug"] {
        assert!(set_level_from_str(name), "{name} should be accepted");
    }
    assert!(!set_level_from_str("invalid"));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_sink_writes_timestamped_lines() {
    use student_portal::logger::init_file_logging;

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("logs").join("portal.log");
    assert!(init_file_logging(&path));

    // Error lines pass at every level, so other tests changing it cannot hide this one
    error!("file sink marker");

    let content = std::fs::read_to_string(&path).unwrap();
    let line = content
        .lines()
        .find(|l| l.ends_with("[ERROR] file sink marker"))
        .expect("marker line should be in the log file");

    // "YYYY-MM-DD HH:MM:SS [ERROR] ..."
    let (stamp, _) = line.split_at(19);
    let parts: Vec<&str> = stamp.split([' ', '-', ':']).collect();
    assert_eq!(parts.len(), 6, "unexpected timestamp: {stamp}");
    assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
}
