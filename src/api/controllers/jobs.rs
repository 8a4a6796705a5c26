//! # Jobs Controller
//!
//! Enqueues console-message jobs for the worker process.
use crate::{
    constants::ENQUEUED_JOB_MESSAGE,
    jobs::ConsoleMessage,
    models::{ApiError, AppState},
};
use actix_web::{web, HttpResponse};
use log::info;

pub const ENQUEUE_RESPONSE: &str = "Job enqueued!";

pub async fn enqueue_console_job(state: web::ThinData<AppState>) -> Result<HttpResponse, ApiError> {
    state
        .job_producer()
        .produce_console_message_job(ConsoleMessage::new(ENQUEUED_JOB_MESSAGE))
        .await?;

    info!("Console message job enqueued");

    Ok(HttpResponse::Ok().body(ENQUEUE_RESPONSE))
}
