mod auth;
pub use auth::*;

mod redis;
pub use redis::*;

mod service_info_log;
pub use service_info_log::*;
