mod logging;
mod redis_config;
