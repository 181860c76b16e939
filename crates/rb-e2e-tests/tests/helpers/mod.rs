//! Shared test harness for E2E integration tests.
//!
//! Wires the webhook router to an in-memory store so tests exercise the
//! real dispatch → extraction → persistence path and can inspect the
//! rows and audit trail afterwards.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use rb_action_server::routes::build_router;
use rb_action_server::state::AppState;
use rb_store::{MemoryReservationStore, ReservationStore};

pub struct TestHarness {
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
    /// Handle on the in-memory store for direct assertions.
    pub store: Arc<MemoryReservationStore>,
}

impl TestHarness {
    pub fn new() -> Self {
        let store = Arc::new(MemoryReservationStore::new());
        let state = AppState::with_store(store.clone());
        Self {
            router: build_router(state),
            store,
        }
    }

    /// POST /webhook with the given action, tracker slots, and message.
    /// Returns (HTTP status code, response JSON body).
    pub async fn run_action(
        &self,
        next_action: &str,
        slots: serde_json::Value,
        text: &str,
    ) -> (StatusCode, serde_json::Value) {
        post_webhook(&self.router, next_action, slots, text).await
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Router over an arbitrary store (e.g. a degraded PostgreSQL store),
/// when no in-memory inspection handle is needed.
pub fn router_with_store(store: Arc<dyn ReservationStore>) -> Router {
    build_router(AppState::with_store(store))
}

/// POST /webhook against any router.
pub async fn post_webhook(
    router: &Router,
    next_action: &str,
    slots: serde_json::Value,
    text: &str,
) -> (StatusCode, serde_json::Value) {
    let body = serde_json::json!({
        "next_action": next_action,
        "tracker": {
            "sender_id": "e2e-tester",
            "slots": slots,
            "latest_message": {"text": text},
        }
    });

    let response = router
        .clone()
        .oneshot(
            Request::post("/webhook")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// First utterance text of a webhook response.
pub fn first_message(json: &serde_json::Value) -> &str {
    json["responses"][0]["text"].as_str().unwrap()
}

/// Value of the named slot event, if the response carries one.
pub fn slot_event<'a>(json: &'a serde_json::Value, name: &str) -> Option<&'a str> {
    json["events"]
        .as_array()?
        .iter()
        .find(|e| e["event"] == "slot" && e["name"] == name)
        .and_then(|e| e["value"].as_str())
}
