mod api;
mod logging;
mod redis_config;
