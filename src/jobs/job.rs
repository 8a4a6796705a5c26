//! Job envelope and payloads carried through the Redis queue.
//!
//! - Console messages pushed by the web process
//! - Recurring reminders emitted by the cron stream in the worker
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

// Common message structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Job<T> {
    pub message_id: String,
    pub version: String,
    pub timestamp: String,
    pub job_type: JobType,
    pub data: T,
}

impl<T> Job<T> {
    pub fn new(job_type: JobType, data: T) -> Self {
        Self {
            message_id: Uuid::new_v4().to_string(),
            version: "1.0".to_string(),
            timestamp: Utc::now().timestamp().to_string(),
            job_type,
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Display, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobType {
    ConsoleMessage,
    RecurringReminder,
}

/// Payload of a job that writes one line to the worker's stdout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConsoleMessage {
    pub message: String,
}

impl ConsoleMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Tick emitted by the cron stream each time the recurring schedule fires.
#[derive(Default, Debug, Clone)]
pub struct RecurringJobReminder(pub Option<DateTime<Utc>>);

impl From<DateTime<Utc>> for RecurringJobReminder {
    fn from(fired_at: DateTime<Utc>) -> Self {
        Self(Some(fired_at))
    }
}
