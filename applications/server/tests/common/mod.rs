//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use mockall::mock;
use std::sync::Arc;
use vision_core::{Result, User, UserId, UserInput, UserService};
use vision_server::{create_router, AppState};
use vision_storage::{InMemoryUserService, UserStore};

mock! {
    pub Users {}

    #[async_trait]
    impl UserService for Users {
        async fn list_users(&self) -> Result<Vec<User>>;
        async fn get_user(&self, id: UserId) -> Result<Option<User>>;
        async fn create_user(&self, user: Option<UserInput>) -> Result<User>;
        async fn update_user(&self, id: UserId, user: Option<UserInput>) -> Result<bool>;
        async fn delete_user(&self, id: UserId) -> Result<bool>;
        async fn user_exists(&self, id: UserId) -> Result<bool>;
    }
}

/// Router over the two sample users, plus a handle to inspect the service
pub fn seeded_app() -> (Router, Arc<InMemoryUserService>) {
    app_with_store(UserStore::seeded())
}

/// Router over an empty store
pub fn empty_app() -> (Router, Arc<InMemoryUserService>) {
    app_with_store(UserStore::new())
}

fn app_with_store(store: UserStore) -> (Router, Arc<InMemoryUserService>) {
    let service = Arc::new(InMemoryUserService::new(store));
    let app = create_router(AppState::new(service.clone()));
    (app, service)
}

/// Router over a mocked service
pub fn mocked_app(users: MockUsers) -> Router {
    create_router(AppState::new(Arc::new(users)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("DELETE")
        .body(Body::empty())
        .unwrap()
}

pub fn send_json(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    send_json("POST", uri, serde_json::to_string(body).unwrap())
}

pub fn put_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    send_json("PUT", uri, serde_json::to_string(body).unwrap())
}

/// Read a response body as JSON
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Read a response body as raw bytes
pub async fn raw_body(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
