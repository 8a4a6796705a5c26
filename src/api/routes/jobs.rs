//! Routes for the landing page and for enqueueing jobs.
use crate::{api::controllers::jobs, models::AppState};
use actix_web::{get, web, HttpResponse, Responder};

pub const GREETING: &str = "Hello from Rust + apalis!";

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().body(GREETING)
}

/// Pushes a console-message job onto the queue.
#[get("/enqueue")]
async fn enqueue(data: web::ThinData<AppState>) -> impl Responder {
    jobs::enqueue_console_job(data).await
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
    cfg.service(enqueue);
}
