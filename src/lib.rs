//! Job host library
//!
//! Shared building blocks of the two processes that make up the service: a
//! web front-end that enqueues jobs and serves a queue dashboard, and a
//! worker that consumes the queue and runs a recurring cron job. Both talk to
//! the same Redis instance.
//!
//! # Module Structure
//!
//! - `config`: Environment configuration, including the Redis connection descriptor
//! - `logging`: Logger setup
//! - `jobs`: Job payloads, queue storage, producer and handlers
//! - `bootstrap`: Startup of the web state and of the workers
//! - `api`: HTTP routes and controllers
//! - `dashboard`: Dashboard authorization and queue statistics
//! - `models`: Shared data structures
//! - `utils`: Common helpers

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod jobs;
pub mod logging;
pub mod models;
pub mod utils;

pub use models::{ApiError, AppState};
