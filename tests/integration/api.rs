//! HTTP surface of the web process, wired the way `jobhost-web` wires it.
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use actix_web::{
    http::StatusCode,
    test::{self, TestRequest},
    web::ThinData,
    App,
};
use async_trait::async_trait;
use jobhost::{
    api::routes::configure_routes,
    dashboard::{
        dashboard_authorization_from, AllowAllAuthorization, DashboardAuthorization,
        QueueStatsProvider,
    },
    jobs::{ConsoleMessage, JobProducerError, JobProducerTrait},
    models::{ApiError, AppState, QueueStats, SecretString},
};

const API_KEY: &str = "integration-test-key-0123456789abcdef";

#[derive(Default)]
struct CountingProducer {
    produced: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl JobProducerTrait for CountingProducer {
    async fn produce_console_message_job(
        &self,
        _console_message_job: ConsoleMessage,
    ) -> Result<(), JobProducerError> {
        if self.fail {
            return Err(JobProducerError::QueueError("connection refused".to_string()));
        }
        self.produced.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FixedStats;

#[async_trait]
impl QueueStatsProvider for FixedStats {
    async fn stats(&self) -> Result<QueueStats, ApiError> {
        Ok(QueueStats {
            namespace: "console_message_queue".to_string(),
            pending: 1,
            scheduled: 0,
            done: 7,
            failed: 0,
            dead: 0,
        })
    }
}

fn app_state(
    producer: Arc<CountingProducer>,
    authorization: Arc<dyn DashboardAuthorization>,
) -> ThinData<AppState> {
    ThinData(AppState {
        job_producer: producer,
        queue_stats: Arc::new(FixedStats),
        dashboard_authorization: authorization,
    })
}

#[actix_web::test]
async fn test_enqueue_then_dashboard() {
    let producer = Arc::new(CountingProducer::default());
    let app = test::init_service(
        App::new()
            .app_data(app_state(
                producer.clone(),
                Arc::new(AllowAllAuthorization::new()),
            ))
            .configure(|cfg| configure_routes(cfg, "/dashboard")),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    for _ in 0..3 {
        let resp = test::call_service(&app, TestRequest::get().uri("/enqueue").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "Job enqueued!");
    }
    assert_eq!(producer.produced.load(Ordering::SeqCst), 3);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/dashboard/stats").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["data"]["done"], 7);
}

#[actix_web::test]
async fn test_enqueue_reports_unavailable_queue() {
    let producer = Arc::new(CountingProducer {
        fail: true,
        ..Default::default()
    });
    let app = test::init_service(
        App::new()
            .app_data(app_state(producer, Arc::new(AllowAllAuthorization::new())))
            .configure(|cfg| configure_routes(cfg, "/dashboard")),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/enqueue").to_request()).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_dashboard_with_configured_api_key() {
    let key = SecretString::new(API_KEY);
    let app = test::init_service(
        App::new()
            .app_data(app_state(
                Arc::new(CountingProducer::default()),
                dashboard_authorization_from(Some(&key)),
            ))
            .configure(|cfg| configure_routes(cfg, "/jobs")),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/jobs").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/jobs")
            .insert_header(("Authorization", format!("Bearer {}", API_KEY)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
