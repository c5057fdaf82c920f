//! Common test utilities and helpers
//!
//! Provides shared utilities for the integration tests:
//! - Test server fixtures over an in-memory store
//! - Request helpers for the game flow
//! - Custom assertion macros

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};
use triviaboard::backend::routes::create_router;
use triviaboard::backend::server::AppState;
use triviaboard::backend::store::{MemoryStore, SharedStore};
use triviaboard::shared::ServerConfig;

/// Assert that a response carries the given status and an `{"error": ...}` body
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status, "body: {}", response.text());
        let body: serde_json::Value = response.json();
        assert!(
            body.get("error").and_then(|e| e.as_str()).is_some(),
            "Expected an error message, got {}",
            body
        );
        body
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Server plus a handle on the store it runs against
pub struct TestApp {
    pub server: TestServer,
    pub store: SharedStore,
}

/// Create a test server over a fresh in-memory store
pub fn test_app() -> TestApp {
    test_app_with_config(ServerConfig::default())
}

/// Create a test server over a fresh in-memory store with `config`
pub fn test_app_with_config(config: ServerConfig) -> TestApp {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let app = create_router(AppState::new(store.clone(), config));
    let server = TestServer::new(app).expect("Failed to create test server");
    TestApp { server, store }
}

impl TestApp {
    pub async fn login(&self, name: &str, phone: &str) -> TestResponse {
        self.server
            .post("/api/login")
            .json(&json!({ "name": name, "phone": phone }))
            .await
    }

    pub async fn record(&self, phone: &str, result: &str, time_used: f64) -> TestResponse {
        self.server
            .post("/api/leaderboard/record")
            .json(&json!({ "phone": phone, "result": result, "timeUsed": time_used }))
            .await
    }

    pub async fn leaderboard(&self) -> Vec<Value> {
        let response = self.server.get("/api/leaderboard").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        response.json()
    }

    /// Log in and record a result, asserting both succeed
    pub async fn play(&self, name: &str, phone: &str, result: &str, time_used: f64) {
        assert_eq!(self.login(name, phone).await.status_code(), StatusCode::OK);
        assert_eq!(
            self.record(phone, result, time_used).await.status_code(),
            StatusCode::OK
        );
    }
}
