//! Common Test Utilities
//!
//! Test application over the in-memory backend, plus fixtures.

use axum::{body::Body, http::Request, Router};
use axum_test::TestServer;
use fake::{faker::company::en::CompanyName, Fake};
use serde_json::{json, Value};
use tower::ServiceExt;

use biztime::config::CorsSettings;
use biztime::infrastructure::repositories::InMemoryStore;
use biztime::startup::{build_router, AppState, Storage};

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub server: TestServer,
}

impl TestApp {
    /// Create a new test application backed by a fresh in-memory store
    pub fn new() -> Self {
        let state = AppState::from_storage(&Storage::Memory(InMemoryStore::new()));
        let router = build_router(
            state,
            &CorsSettings {
                allowed_origins: vec![],
            },
        );
        let server = TestServer::new(router.clone()).expect("Failed to create test server");

        Self { router, server }
    }

    /// Seed a company through the API and return its JSON
    pub async fn seed_company(&self, code: &str, name: &str, description: &str) -> Value {
        let response = self
            .server
            .post("/companies")
            .json(&json!({ "code": code, "name": name, "description": description }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["company"].clone()
    }

    /// Seed an invoice through the API and return its JSON
    pub async fn seed_invoice(&self, comp_code: &str, amt: f64) -> Value {
        let response = self
            .server
            .post("/invoices")
            .json(&json!({ "comp_code": comp_code, "amt": amt }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["invoice"].clone()
    }

    /// Send a raw request through the router, bypassing the test server
    pub async fn send_raw(
        &self,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header("Content-Type", content_type);
        }

        self.router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }
}

/// Apple fixture used by the scenario tests
pub const APPLE: (&str, &str, &str) = ("apple", "Apple", "Maker of tech");

/// Generate a unique company code
pub fn unique_code() -> String {
    format!("co-{}", &uuid::Uuid::new_v4().to_string()[..8])
}

/// Generate a plausible company name
pub fn fake_company_name() -> String {
    CompanyName().fake()
}

/// Today's date as serialized by the API
pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
