//! Global subscriber installation
//!
//! Runs in its own test binary so the global default is not shared with
//! unit tests.

use tempfile::TempDir;

use tome_logging::{FileConfig, LogConfig, LoggingError, RotationStrategy, TomeSubscriberBuilder};

#[test]
fn test_init_once_then_reject_second() {
    let dir = TempDir::new().unwrap();
    let file = FileConfig {
        directory: dir.path().to_path_buf(),
        prefix: "tome-test".to_string(),
        rotation: RotationStrategy::Never,
        max_files: None,
    };

    let guard = TomeSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .with_file_output(file)
        .try_init()
        .unwrap();
    assert!(guard.is_some());
    tracing::warn!(category = "Characters", "Logged after init");

    let second = TomeSubscriberBuilder::new().try_init();
    assert!(matches!(second, Err(LoggingError::Install(_))));
}
