pub const AUTHORIZATION_HEADER_NAME: &str = "Authorization";
pub const AUTHORIZATION_HEADER_VALUE_PREFIX: &str = "Bearer ";

pub const MINIMUM_SECRET_VALUE_LENGTH: usize = 32;
