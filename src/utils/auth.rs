use actix_web::http::header::HeaderMap;

use crate::{
    constants::{AUTHORIZATION_HEADER_NAME, AUTHORIZATION_HEADER_VALUE_PREFIX},
    models::SecretString,
};

/// Checks that the request carries exactly one `Authorization: Bearer <key>`
/// header whose token matches `expected_key`.
///
/// Tokens that are empty or contain spaces are rejected before comparison.
pub fn check_authorization_header(headers: &HeaderMap, expected_key: &SecretString) -> bool {
    let mut values = headers.get_all(AUTHORIZATION_HEADER_NAME);
    let (Some(value), None) = (values.next(), values.next()) else {
        return false;
    };

    let Some(token) = value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix(AUTHORIZATION_HEADER_VALUE_PREFIX))
    else {
        return false;
    };

    if token.is_empty() || token.contains(' ') {
        return false;
    }

    &SecretString::new(token) == expected_key
}
