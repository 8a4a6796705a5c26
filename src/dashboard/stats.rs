//! Queue counters for the dashboard.
//!
//! Counts are read straight from the keys the Redis queue storage keeps per
//! namespace; nothing is written.
use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use redis::aio::ConnectionManager;

use crate::models::{ApiError, QueueStats};

#[cfg(test)]
use mockall::automock;

const ACTIVE_LIST_SUFFIX: &str = "active";
const SCHEDULED_SET_SUFFIX: &str = "scheduled";
const DONE_SET_SUFFIX: &str = "done";
const FAILED_SET_SUFFIX: &str = "failed";
const DEAD_SET_SUFFIX: &str = "dead";

#[async_trait]
#[cfg_attr(test, automock)]
pub trait QueueStatsProvider: Send + Sync {
    async fn stats(&self) -> Result<QueueStats, ApiError>;
}

#[derive(Clone)]
pub struct RedisQueueStats {
    client: Arc<ConnectionManager>,
    namespace: String,
}

impl RedisQueueStats {
    pub fn new(client: Arc<ConnectionManager>, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }

    fn key(&self, suffix: &str) -> String {
        namespaced_key(&self.namespace, suffix)
    }
}

fn namespaced_key(namespace: &str, suffix: &str) -> String {
    format!("{}:{}", namespace, suffix)
}

#[async_trait]
impl QueueStatsProvider for RedisQueueStats {
    async fn stats(&self) -> Result<QueueStats, ApiError> {
        let mut conn = (*self.client).clone();

        let (pending, scheduled, done, failed, dead): (u64, u64, u64, u64, u64) = redis::pipe()
            .llen(self.key(ACTIVE_LIST_SUFFIX))
            .zcard(self.key(SCHEDULED_SET_SUFFIX))
            .zcard(self.key(DONE_SET_SUFFIX))
            .zcard(self.key(FAILED_SET_SUFFIX))
            .zcard(self.key(DEAD_SET_SUFFIX))
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                warn!("Failed to read stats for queue '{}': {}", self.namespace, e);
                ApiError::QueueUnavailable(format!(
                    "Failed to read stats for queue '{}'",
                    self.namespace
                ))
            })?;

        Ok(QueueStats {
            namespace: self.namespace.clone(),
            pending,
            scheduled,
            done,
            failed,
            dead,
        })
    }
}
