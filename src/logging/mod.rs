//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory holding log files (default "./logs")
//! - LOG_MAX_SIZE: when using file mode, bytes after which a new file is started (default 1GB)
//!
//! File names roll by UTC date first and by size second:
//! `<dir>/<process>-<date>.<n>.log`.

use chrono::Utc;
use eyre::{Result, WrapErr};
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, metadata, OpenOptions},
    path::PathBuf,
};

const DEFAULT_LOG_DIR: &str = "./logs";
const DEFAULT_LOG_MAX_SIZE: u64 = 1_073_741_824;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMode {
    Stdout,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub mode: LogMode,
    pub level: LevelFilter,
    pub dir: PathBuf,
    pub max_size: u64,
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        let mode = match env::var("LOG_MODE") {
            Ok(mode) if mode.eq_ignore_ascii_case("file") => LogMode::File,
            _ => LogMode::Stdout,
        };

        let level = env::var("LOG_LEVEL")
            .map(|level| parse_level(&level))
            .unwrap_or(LevelFilter::Info);

        let max_size = match env::var("LOG_MAX_SIZE") {
            Ok(size) => size
                .trim()
                .parse::<u64>()
                .wrap_err_with(|| format!("LOG_MAX_SIZE must be a valid u64, got '{}'", size))?,
            Err(_) => DEFAULT_LOG_MAX_SIZE,
        };

        Ok(Self {
            mode,
            level,
            dir: PathBuf::from(
                env::var("LOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string()),
            ),
            max_size,
        })
    }
}

/// Unknown levels fall back to `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Computes the path of the rolled log file given the base file path and the date string.
pub fn compute_rolled_file_path(base_file_path: &str, date_str: &str, index: u32) -> String {
    let stem = base_file_path
        .strip_suffix(".log")
        .unwrap_or(base_file_path);
    format!("{}-{}.{}.log", stem, date_str, index)
}

/// Starting from `file_path`, moves to the next index while the candidate
/// file already exceeds `max_size` bytes.
pub fn space_based_rolling(
    file_path: &str,
    base_file_path: &str,
    date_str: &str,
    max_size: u64,
) -> String {
    let mut candidate = file_path.to_string();
    let mut index = 1;
    while metadata(&candidate).is_ok_and(|m| m.len() > max_size) {
        candidate = compute_rolled_file_path(base_file_path, date_str, index);
        index += 1;
    }
    candidate
}

/// Log file the process should append to today.
pub fn resolve_log_file_path(config: &LogConfig, process: &str, date_str: &str) -> String {
    let base_file_path = config
        .dir
        .join(format!("{}.log", process))
        .to_string_lossy()
        .into_owned();
    let dated = compute_rolled_file_path(&base_file_path, date_str, 1);
    space_based_rolling(&dated, &base_file_path, date_str, config.max_size)
}

/// Installs the global logger for `process` according to the environment.
///
/// May only succeed once per process.
pub fn setup_logging(process: &str) -> Result<()> {
    let config = LogConfig::from_env()?;

    match config.mode {
        LogMode::File => {
            let date_str = Utc::now().format("%Y-%m-%d").to_string();
            let path = resolve_log_file_path(&config, process, &date_str);

            create_dir_all(&config.dir).wrap_err_with(|| {
                format!("Failed to create log directory {}", config.dir.display())
            })?;
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .wrap_err_with(|| format!("Unable to open log file {}", path))?;

            WriteLogger::init(config.level, Config::default(), log_file)
                .wrap_err("Failed to initialize file logger")?;
            info!("Logging to file {}", path);
        }
        LogMode::Stdout => {
            SimpleLogger::init(config.level, Config::default())
                .wrap_err("Failed to initialize stdout logger")?;
        }
    }

    info!(
        "Logging is successfully configured (mode: {:?}, level: {})",
        config.mode, config.level
    );
    Ok(())
}
