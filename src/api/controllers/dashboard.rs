//! # Dashboard Controller
//!
//! Serves queue statistics once the configured authorization predicate has
//! accepted the request.
use crate::{
    dashboard::DashboardContext,
    models::{ApiError, ApiResponse, AppState},
};
use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;

pub async fn get_queue_stats(
    req: HttpRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    authorize(&req, &state)?;

    let stats = state.queue_stats().stats().await?;
    debug!("Queue stats: {:?}", stats);

    Ok(HttpResponse::Ok().json(ApiResponse::success(stats)))
}

fn authorize(req: &HttpRequest, state: &AppState) -> Result<(), ApiError> {
    let context = DashboardContext::from_request(req);
    if state.dashboard_authorization.authorize(&context) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized(
            "Dashboard access denied".to_string(),
        ))
    }
}
