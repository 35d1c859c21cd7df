#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use tinylink::domain::entities::{Link, NewLink};
use tinylink::domain::repositories::{LinkRepository, StoreError};
use tinylink::infrastructure::persistence::InMemoryLinkRepository;
use tinylink::routes::build_router;
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://tiny.test";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkRepository::new()), BASE_URL)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

/// Creates a link through the API and returns the response body.
pub async fn create_link(server: &TestServer, target_url: &str, code: Option<&str>) -> Value {
    let body = match code {
        Some(code) => json!({ "target_url": target_url, "code": code }),
        None => json!({ "target_url": target_url }),
    };

    let response = server.post("/api/links").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// A store whose every operation fails as unreachable.
pub struct UnavailableRepository;

#[async_trait]
impl LinkRepository for UnavailableRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn list(&self) -> Result<Vec<Link>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn delete_by_code(&self, _code: &str) -> Result<Option<Link>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn increment_click(&self, _code: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

pub fn unavailable_state() -> AppState {
    AppState::new(Arc::new(UnavailableRepository), BASE_URL)
}
