//! Dashboard routes, mounted under a configurable path.
use crate::{api::controllers::dashboard, models::AppState};
use actix_web::{web, HttpRequest, Responder};

async fn queue_stats(req: HttpRequest, data: web::ThinData<AppState>) -> impl Responder {
    dashboard::get_queue_stats(req, data).await
}

/// Mounts `{path}` and `{path}/stats`, both serving the queue statistics.
pub fn init(cfg: &mut web::ServiceConfig, path: &str) {
    cfg.service(
        web::scope(path)
            .route("", web::get().to(queue_stats))
            .route("/stats", web::get().to(queue_stats)),
    );
}
