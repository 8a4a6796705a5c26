//! Job producer module for enqueueing jobs to Redis queues.
//!
//! The web process only produces console-message jobs.

use crate::{
    jobs::{ConsoleMessage, Job, JobType, Queue},
    models::ApiError,
};
use apalis::prelude::Storage;
use apalis_redis::RedisError;
use async_trait::async_trait;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error, Serialize)]
pub enum JobProducerError {
    #[error("Queue error: {0}")]
    QueueError(String),
}

impl From<RedisError> for JobProducerError {
    fn from(e: RedisError) -> Self {
        JobProducerError::QueueError(e.to_string())
    }
}

impl From<JobProducerError> for ApiError {
    fn from(e: JobProducerError) -> Self {
        ApiError::QueueUnavailable(e.to_string())
    }
}

#[derive(Debug)]
pub struct JobProducer {
    queue: Mutex<Queue>,
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait JobProducerTrait: Send + Sync {
    async fn produce_console_message_job(
        &self,
        console_message_job: ConsoleMessage,
    ) -> Result<(), JobProducerError>;
}

impl JobProducer {
    pub fn new(queue: Queue) -> Self {
        Self {
            queue: Mutex::new(queue),
        }
    }
}

#[async_trait]
impl JobProducerTrait for JobProducer {
    async fn produce_console_message_job(
        &self,
        console_message_job: ConsoleMessage,
    ) -> Result<(), JobProducerError> {
        info!("Producing console message job: {:?}", console_message_job);
        let mut queue = self.queue.lock().await;
        let job = Job::new(JobType::ConsoleMessage, console_message_job);

        if let Err(e) = queue.console_message_queue.push(job).await {
            error!("Failed to produce console message job: {}", e);
            return Err(e.into());
        }
        info!("Console message job produced successfully");

        Ok(())
    }
}
