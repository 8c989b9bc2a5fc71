/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use roster_core::{NewUser, Result, RosterError, User, UserStore};
use roster_server::{create_router, AppState};
use roster_storage::MemoryStore;
use std::sync::Arc;

/// Router backed by a fresh in-memory store
pub fn create_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = create_router(AppState::new(store.clone()));
    (app, store)
}

/// Router whose store fails every operation
pub fn create_failing_app() -> Router {
    create_router(AppState::new(Arc::new(FailingStore)))
}

/// Store simulating a database that rejects everything
pub struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn insert_user(&self, _user: NewUser) -> Result<User> {
        Err(RosterError::database("E11000 duplicate key error collection: users.users"))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Err(RosterError::connection("server selection timeout"))
    }
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Test user fields
pub mod fixtures {
    pub fn ann() -> serde_json::Value {
        serde_json::json!({
            "name": "Ann",
            "last_name": "Lee",
            "city": "Reno",
            "email": "ann@example.com",
            "password": "x"
        })
    }
}
