//! # Models Module
//!
//! Core data structures shared by the web and worker processes.

mod app_state;
pub use app_state::*;

mod api_response;
pub use api_response::*;

mod error;
pub use error::*;

mod queue_stats;
pub use queue_stats::*;

mod secret_string;
pub use secret_string::*;
