//! This module contains all the constant values used in the system
mod redis;
pub use redis::*;

mod worker;
pub use worker::*;

mod authorization;
pub use authorization::*;

mod server;
pub use server::*;
