pub const REDIS_URL_ENV: &str = "REDIS_URL";

pub const REDIS_SCHEME: &str = "redis";
pub const REDIS_TLS_SCHEME: &str = "rediss";

pub const DEFAULT_REDIS_PORT: u16 = 6379;
pub const DEFAULT_REDIS_TLS_PORT: u16 = 6380;

pub const DEFAULT_REDIS_CONNECTION_TIMEOUT_MS: u64 = 5000;
