//! # Workers
//! Builds the worker monitor and runs it until the process receives a shutdown signal

use apalis::{
    layers::{retry::RetryPolicy, ErrorHandlingLayer},
    prelude::*,
};
use apalis_cron::CronStream;
use eyre::Result;
use log::{error, info};
use std::time::Duration;
use tokio::signal::unix::SignalKind;

use crate::{
    config::WorkerConfig,
    constants::WORKER_DEFAULT_MAXIMUM_RETRIES,
    jobs::{console_message_handler, recurring_job_handler, Queue},
};

const DEFAULT_RATE_LIMIT: u64 = 20;
const DEFAULT_RATE_LIMIT_DURATION: Duration = Duration::from_secs(1);
const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(5000);

pub const CONSOLE_MESSAGE_PRINTER: &str = "console_message_printer";
pub const RECURRING_JOB: &str = "recurring_job";

/// Registers the queue worker and the recurring cron worker, then runs them
/// until SIGINT or SIGTERM.
pub async fn run_workers(config: &WorkerConfig, queue: Queue) -> Result<()> {
    let console_message_worker = WorkerBuilder::new(CONSOLE_MESSAGE_PRINTER)
        .layer(ErrorHandlingLayer::new())
        .enable_tracing()
        .catch_panic()
        .rate_limit(DEFAULT_RATE_LIMIT, DEFAULT_RATE_LIMIT_DURATION)
        .retry(RetryPolicy::retries(WORKER_DEFAULT_MAXIMUM_RETRIES))
        .concurrency(config.concurrency)
        .backend(queue.console_message_queue.clone())
        .build_fn(console_message_handler);

    let recurring_job_worker = WorkerBuilder::new(RECURRING_JOB)
        .layer(ErrorHandlingLayer::new())
        .enable_tracing()
        .catch_panic()
        .retry(RetryPolicy::retries(WORKER_DEFAULT_MAXIMUM_RETRIES))
        .concurrency(1)
        .backend(CronStream::new(config.recurring_job_schedule.clone()))
        .build_fn(recurring_job_handler);

    info!(
        "Recurring job scheduled with '{}'",
        config.recurring_job_schedule
    );

    Monitor::new()
        .register(console_message_worker)
        .register(recurring_job_worker)
        .on_event(monitor_handle_event)
        .shutdown_timeout(SHUTDOWN_TIMEOUT)
        .run_with_signal(shutdown_signal())
        .await?;

    info!("Monitor shutdown complete");
    Ok(())
}

async fn shutdown_signal() -> std::io::Result<()> {
    let mut sigint = tokio::signal::unix::signal(SignalKind::interrupt())?;
    let mut sigterm = tokio::signal::unix::signal(SignalKind::terminate())?;

    info!("Monitor started");

    tokio::select! {
        _ = sigint.recv() => info!("Received SIGINT."),
        _ = sigterm.recv() => info!("Received SIGTERM."),
    };

    info!("Monitor shutting down");

    Ok(())
}

fn monitor_handle_event(e: Worker<Event>) {
    let worker_id = e.id();
    match e.inner() {
        Event::Engage(task_id) => {
            info!("Worker [{worker_id}] got a job with id: {task_id}");
        }
        Event::Error(e) => {
            error!("Worker [{worker_id}] encountered an error: {e}");
        }
        Event::Exit => {
            info!("Worker [{worker_id}] exited");
        }
        Event::Start => {
            info!("Worker [{worker_id}] started");
        }
        Event::Stop => {
            info!("Worker [{worker_id}] stopped");
        }
        _ => {}
    }
}
