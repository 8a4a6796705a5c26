//! Configuration for the worker process.
use std::{env, str::FromStr};

use apalis_cron::Schedule;

use crate::constants::{
    DEFAULT_RECURRING_JOB_SCHEDULE, DEFAULT_REDIS_CONNECTION_TIMEOUT_MS,
    DEFAULT_WORKER_CONCURRENCY,
};

use super::{env_or_default, ConfigurationError, RedisConfig};

#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// The resolved Redis connection descriptor.
    pub redis: RedisConfig,
    /// Timeout applied when connecting to Redis.
    pub redis_connection_timeout_ms: u64,
    /// When the recurring job fires.
    pub recurring_job_schedule: Schedule,
    /// Jobs processed in parallel by the queue worker, at least one.
    pub concurrency: usize,
}

impl WorkerConfig {
    /// Creates a new `WorkerConfig` from environment variables.
    ///
    /// `RECURRING_JOB_SCHEDULE` takes a six-field cron expression (seconds
    /// first) and defaults to once a minute. `WORKER_CONCURRENCY` defaults to `2`.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let redis = RedisConfig::from_env()?;

        let schedule = env::var("RECURRING_JOB_SCHEDULE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RECURRING_JOB_SCHEDULE.to_string());

        Ok(Self {
            redis,
            redis_connection_timeout_ms: env_or_default(
                "REDIS_CONNECTION_TIMEOUT_MS",
                DEFAULT_REDIS_CONNECTION_TIMEOUT_MS,
            ),
            recurring_job_schedule: parse_schedule(&schedule)?,
            concurrency: env_or_default("WORKER_CONCURRENCY", DEFAULT_WORKER_CONCURRENCY).max(1),
        })
    }
}

pub fn parse_schedule(schedule: &str) -> Result<Schedule, ConfigurationError> {
    Schedule::from_str(schedule.trim()).map_err(|e| ConfigurationError::InvalidSchedule {
        schedule: schedule.to_string(),
        reason: e.to_string(),
    })
}
