//! Initialization routines for the web and worker processes
//!
//! # Submodules
//!
//! - `initialize_app_state`: Builds the shared state of the web process
//! - `initialize_workers`: Builds and runs the background workers
mod initialize_app_state;
pub use initialize_app_state::*;

mod initialize_workers;
pub use initialize_workers::*;
