//! Configuration for the web and worker processes.
//!
//! Everything is read from environment variables once during startup:
//! - `redis_config`: the Redis connection descriptor resolved from `REDIS_URL`
//! - `server_config`: bind address and dashboard settings of the web process
//! - `worker_config`: schedule and concurrency of the worker process
mod redis_config;
pub use redis_config::*;

mod server_config;
pub use server_config::*;

mod worker_config;
pub use worker_config::*;

mod error;
pub use error::*;

use std::{env, str::FromStr};

/// Parses an optional environment variable, falling back to `default` when it
/// is unset or cannot be parsed.
pub(crate) fn env_or_default<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
