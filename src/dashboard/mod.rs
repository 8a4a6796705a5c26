//! # Dashboard
//!
//! Read-only view over the job queue, guarded by a pluggable authorization
//! predicate.
//!
//! - `authorization`: the predicate trait and its implementations
//! - `stats`: queue counters read from Redis
mod authorization;
pub use authorization::*;

mod stats;
pub use stats::*;
