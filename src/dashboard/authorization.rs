//! Authorization predicates guarding the dashboard.
//!
//! A predicate sees a [`DashboardContext`] describing the incoming request and
//! answers whether it may proceed. Two implementations ship:
//!
//! - [`AllowAllAuthorization`] permits every request. It exists for local
//!   development and must not be exposed on an untrusted network.
//! - [`ApiKeyAuthorization`] requires `Authorization: Bearer <key>`.
use std::sync::Arc;

use actix_web::{http::header::HeaderMap, HttpRequest};
use log::{info, warn};

use crate::{models::SecretString, utils::check_authorization_header};

/// What an authorization predicate gets to see of a dashboard request.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub path: String,
    pub peer_addr: Option<String>,
    pub headers: HeaderMap,
}

impl DashboardContext {
    pub fn from_request(req: &HttpRequest) -> Self {
        Self {
            path: req.path().to_string(),
            peer_addr: req.peer_addr().map(|addr| addr.to_string()),
            headers: req.headers().clone(),
        }
    }
}

pub trait DashboardAuthorization: Send + Sync {
    fn authorize(&self, context: &DashboardContext) -> bool;

    /// Short label used in logs.
    fn name(&self) -> &'static str;
}

/// Permit-all predicate. Unsafe for production.
#[derive(Debug, Default, Clone)]
pub struct AllowAllAuthorization;

impl AllowAllAuthorization {
    pub fn new() -> Self {
        Self
    }
}

impl DashboardAuthorization for AllowAllAuthorization {
    fn authorize(&self, _context: &DashboardContext) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "allow-all"
    }
}

#[derive(Debug, Clone)]
pub struct ApiKeyAuthorization {
    api_key: SecretString,
}

impl ApiKeyAuthorization {
    pub fn new(api_key: SecretString) -> Self {
        Self { api_key }
    }
}

impl DashboardAuthorization for ApiKeyAuthorization {
    fn authorize(&self, context: &DashboardContext) -> bool {
        let allowed = check_authorization_header(&context.headers, &self.api_key);
        if !allowed {
            warn!(
                "Rejected dashboard request to {} from {}",
                context.path,
                context.peer_addr.as_deref().unwrap_or("unknown peer")
            );
        }
        allowed
    }

    fn name(&self) -> &'static str {
        "api-key"
    }
}

/// Picks the API key predicate when a key is configured, otherwise permit-all.
pub fn dashboard_authorization_from(
    api_key: Option<&SecretString>,
) -> Arc<dyn DashboardAuthorization> {
    let authorization: Arc<dyn DashboardAuthorization> = match api_key {
        Some(key) => Arc::new(ApiKeyAuthorization::new(key.clone())),
        None => {
            warn!("Dashboard is open to every request; set DASHBOARD_API_KEY to protect it");
            Arc::new(AllowAllAuthorization::new())
        }
    };
    info!("Dashboard authorization: {}", authorization.name());
    authorization
}
