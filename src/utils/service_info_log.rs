//! This module contains the function to log service information at startup.
use log::{info, warn};
use std::env;

use crate::config::RedisConfig;

/// Logs service information at startup
pub fn log_service_info(process: &str) {
    info!("=== {} {} starting ===", env!("CARGO_PKG_NAME"), process);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Platform: {} ({})", env::consts::OS, env::consts::ARCH);

    if let Ok(cwd) = env::current_dir() {
        info!("Working Directory: {}", cwd.display());
    }

    info!(
        "Started at: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
}

/// Logs where the queue lives and how the connection is secured.
pub fn log_redis_info(redis: &RedisConfig) {
    info!(
        "Redis endpoint: {} (tls: {})",
        redis.endpoint(),
        redis.secure_transport
    );
    if redis.skip_certificate_validation {
        warn!(
            "TLS certificate validation is disabled for Redis at {}",
            redis.endpoint()
        );
    }
}
