//! # API Controllers Module
//!
//! Request handling behind the routes in `api::routes`.

pub mod dashboard;
pub mod jobs;
