use std::sync::Arc;

use crate::{
    dashboard::{DashboardAuthorization, QueueStatsProvider},
    jobs::JobProducerTrait,
};

/// Shared state of the web process, built once during startup.
#[derive(Clone)]
pub struct AppState {
    pub job_producer: Arc<dyn JobProducerTrait>,
    pub queue_stats: Arc<dyn QueueStatsProvider>,
    pub dashboard_authorization: Arc<dyn DashboardAuthorization>,
}

impl AppState {
    pub fn job_producer(&self) -> Arc<dyn JobProducerTrait> {
        Arc::clone(&self.job_producer)
    }

    pub fn queue_stats(&self) -> Arc<dyn QueueStatsProvider> {
        Arc::clone(&self.queue_stats)
    }
}
