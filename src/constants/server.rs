pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_APP_PORT: u16 = 8080;
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
