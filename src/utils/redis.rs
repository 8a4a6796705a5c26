use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use redis::aio::ConnectionManager;
use tokio::time::timeout;

use crate::config::RedisConfig;

/// Initializes a Redis connection manager for the given descriptor.
///
/// # Arguments
///
/// * `redis` - The resolved connection descriptor.
/// * `connection_timeout_ms` - Upper bound on establishing the connection.
pub async fn initialize_redis_connection(
    redis: &RedisConfig,
    connection_timeout_ms: u64,
) -> Result<Arc<ConnectionManager>> {
    let redis_client = redis::Client::open(redis.connection_info())?;
    let connection_manager = timeout(
        Duration::from_millis(connection_timeout_ms),
        ConnectionManager::new(redis_client),
    )
    .await
    .map_err(|_| {
        eyre::eyre!(
            "Redis connection timeout after {}ms connecting to {}",
            connection_timeout_ms,
            redis.endpoint()
        )
    })??;

    Ok(Arc::new(connection_manager))
}
