//! # API Module
//!
//! HTTP surface of the web process.
//!
//! ## Structure
//!
//! * `controllers` - Request handling logic
//! * `routes` - Endpoint definitions and routing

pub mod controllers;

pub mod routes;
