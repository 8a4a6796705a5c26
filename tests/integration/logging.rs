//! Integration test for file logging.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory holding log files (default "./logs")
//! Refer to `src/logging/mod.rs` for more details.
use chrono::Utc;
use jobhost::logging::{resolve_log_file_path, setup_logging, LogConfig};
use log::info;
use std::{env, fs, sync::Mutex};
use tempfile::TempDir;

use lazy_static::lazy_static;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_invalid_log_max_size() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    env::set_var("LOG_MAX_SIZE", "invalid_value");
    let result = LogConfig::from_env();
    env::remove_var("LOG_MAX_SIZE");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("LOG_MAX_SIZE must be a valid u64"));
}

struct FileLogging {
    _dir: TempDir,
    path: String,
}

// The global logger can only be installed once per process.
lazy_static! {
    static ref INIT_LOGGING: FileLogging = {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let log_dir = dir.path().join("nested");

        env::set_var("LOG_MODE", "file");
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("LOG_DATA_DIR", &log_dir);
        env::remove_var("LOG_MAX_SIZE");

        setup_logging("jobhost-test").expect("Failed to set up logging");

        let config = LogConfig::from_env().expect("Invalid log config");
        let date_str = Utc::now().format("%Y-%m-%d").to_string();
        let path = resolve_log_file_path(&config, "jobhost-test", &date_str);

        env::remove_var("LOG_MODE");
        env::remove_var("LOG_LEVEL");
        env::remove_var("LOG_DATA_DIR");

        FileLogging { _dir: dir, path }
    };
}

#[test]
fn test_file_logging() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let logging = &*INIT_LOGGING;

    info!("file logging integration test");
    log::logger().flush();

    let content = fs::read_to_string(&logging.path).expect("Log file was not created");
    assert!(content.contains("file logging integration test"));
}

#[test]
fn test_logging_initializes_once() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let _ = &*INIT_LOGGING;

    assert!(setup_logging("jobhost-test").is_err());
}
