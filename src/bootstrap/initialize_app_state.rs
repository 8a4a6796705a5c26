//! Application state initialization
//!
//! Connects the queue client and the dashboard's Redis connection using the
//! resolved configuration and assembles them into [`AppState`].
use crate::{
    config::ServerConfig,
    constants::CONSOLE_MESSAGE_QUEUE_NAMESPACE,
    dashboard::{dashboard_authorization_from, RedisQueueStats},
    jobs::{JobProducer, Queue},
    models::AppState,
    utils::initialize_redis_connection,
};
use actix_web::web;
use color_eyre::{eyre::WrapErr, Result};
use std::sync::Arc;

/// Initializes application state
///
/// # Errors
///
/// Returns error if the queue storage or the dashboard connection cannot
/// reach Redis within the configured timeout.
pub async fn initialize_app_state(config: &ServerConfig) -> Result<web::ThinData<AppState>> {
    let queue = Queue::setup(&config.redis, config.redis_connection_timeout_ms)
        .await
        .wrap_err("Failed to set up job queue")?;
    let job_producer = Arc::new(JobProducer::new(queue));

    let connection =
        initialize_redis_connection(&config.redis, config.redis_connection_timeout_ms)
            .await
            .wrap_err("Failed to connect dashboard to Redis")?;
    let queue_stats = Arc::new(RedisQueueStats::new(
        connection,
        CONSOLE_MESSAGE_QUEUE_NAMESPACE,
    ));

    Ok(web::ThinData(AppState {
        job_producer,
        queue_stats,
        dashboard_authorization: dashboard_authorization_from(config.dashboard_api_key.as_ref()),
    }))
}
