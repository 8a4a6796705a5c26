//! Queue management module for job processing.
//!
//! Both processes open the same Redis-backed storage: the web process pushes
//! console jobs into it and the worker process consumes them.
use apalis_redis::{Config, RedisStorage};
use color_eyre::{eyre, Result};
use log::{error, info};
use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};

use crate::{config::RedisConfig, constants::CONSOLE_MESSAGE_QUEUE_NAMESPACE};

use super::{ConsoleMessage, Job};

#[derive(Clone, Debug)]
pub struct Queue {
    pub console_message_queue: RedisStorage<Job<ConsoleMessage>>,
}

/// Storage settings for a queue namespace.
pub fn queue_config(namespace: &str) -> Config {
    Config::default().set_namespace(namespace)
}

impl Queue {
    async fn storage<T: Serialize + for<'de> Deserialize<'de>>(
        redis: &RedisConfig,
        connection_timeout_ms: u64,
        namespace: &str,
    ) -> Result<RedisStorage<T>> {
        let endpoint = redis.endpoint();

        let conn = match timeout(
            Duration::from_millis(connection_timeout_ms),
            apalis_redis::connect(redis.connection_info()),
        )
        .await
        {
            Ok(result) => result.map_err(|e| {
                error!("Failed to connect to Redis at {}: {}", endpoint, e);
                eyre::eyre!(
                    "Failed to connect to Redis. Please ensure Redis is running and accessible at {}. Error: {}",
                    endpoint,
                    e
                )
            })?,
            Err(_) => {
                error!("Timeout connecting to Redis at {}", endpoint);
                return Err(eyre::eyre!(
                    "Timed out after {} milliseconds while connecting to Redis at {}",
                    connection_timeout_ms,
                    endpoint
                ));
            }
        };
        info!("Connected queue '{}' to Redis at {}", namespace, endpoint);

        Ok(RedisStorage::new_with_config(conn, queue_config(namespace)))
    }

    pub async fn setup(redis: &RedisConfig, connection_timeout_ms: u64) -> Result<Self> {
        Ok(Self {
            console_message_queue: Self::storage(
                redis,
                connection_timeout_ms,
                CONSOLE_MESSAGE_QUEUE_NAMESPACE,
            )
            .await?,
        })
    }
}
