//! # API Routes Module
//!
//! Configures HTTP routes for the web process.
//!
//! ## Routes
//!
//! * `/` - Greeting
//! * `/enqueue` - Enqueue a console-message job
//! * `/health` - Health check endpoint
//! * `{dashboard_path}` - Queue dashboard

pub mod dashboard;
pub mod health;
pub mod jobs;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig, dashboard_path: &str) {
    cfg.configure(health::init)
        .configure(jobs::init)
        .configure(|cfg| dashboard::init(cfg, dashboard_path));
}
