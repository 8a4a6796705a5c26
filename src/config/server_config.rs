/// Configuration for the web process, including the Redis connection and dashboard settings.
use std::env;

use crate::{
    constants::{
        DEFAULT_APP_PORT, DEFAULT_DASHBOARD_PATH, DEFAULT_HOST,
        DEFAULT_REDIS_CONNECTION_TIMEOUT_MS, MINIMUM_SECRET_VALUE_LENGTH,
    },
    models::SecretString,
};

use super::{env_or_default, ConfigurationError, RedisConfig};

pub const DASHBOARD_API_KEY_ENV: &str = "DASHBOARD_API_KEY";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address the server will bind to.
    pub host: String,
    /// The port number the server will listen on.
    pub port: u16,
    /// The resolved Redis connection descriptor.
    pub redis: RedisConfig,
    /// Timeout applied when connecting to Redis.
    pub redis_connection_timeout_ms: u64,
    /// Path the dashboard is mounted under, always starting with `/`.
    pub dashboard_path: String,
    /// Bearer token guarding the dashboard. `None` leaves it open.
    pub dashboard_api_key: Option<SecretString>,
}

impl ServerConfig {
    /// Creates a new `ServerConfig` instance from environment variables.
    ///
    /// # Errors
    ///
    /// Fails when `REDIS_URL` is missing or malformed, or when
    /// `DASHBOARD_API_KEY` is set but shorter than the minimum secret length.
    ///
    /// # Defaults
    ///
    /// - `HOST` defaults to `"0.0.0.0"`.
    /// - `APP_PORT` defaults to `8080`.
    /// - `REDIS_CONNECTION_TIMEOUT_MS` defaults to `5000`.
    /// - `DASHBOARD_PATH` defaults to `"/dashboard"`.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let redis = RedisConfig::from_env()?;

        let dashboard_path = env::var("DASHBOARD_PATH")
            .ok()
            .map(|path| normalize_path(&path))
            .filter(|path| path != "/")
            .unwrap_or_else(|| DEFAULT_DASHBOARD_PATH.to_string());

        let dashboard_api_key = match env::var(DASHBOARD_API_KEY_ENV) {
            Ok(key) if !key.is_empty() => {
                let key = SecretString::new(&key);
                if !key.has_minimum_length(MINIMUM_SECRET_VALUE_LENGTH) {
                    return Err(ConfigurationError::SecretTooShort(
                        DASHBOARD_API_KEY_ENV.to_string(),
                        MINIMUM_SECRET_VALUE_LENGTH,
                    ));
                }
                Some(key)
            }
            _ => None,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env_or_default("APP_PORT", DEFAULT_APP_PORT),
            redis,
            redis_connection_timeout_ms: env_or_default(
                "REDIS_CONNECTION_TIMEOUT_MS",
                DEFAULT_REDIS_CONNECTION_TIMEOUT_MS,
            ),
            dashboard_path,
            dashboard_api_key,
        })
    }
}

fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim().trim_matches('/'))
}
