#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use catalog_core::content::{Content, ContentDto};
use catalog_core::error::{CoreError, CoreResult};
use catalog_core::gateway::Gateway;
use catalog_core::manager::ContentService;
use catalog_core::memory::InMemoryGateway;
use catalog_core::types::ContentId;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::config::{ServerConfig, StoreBackend};
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        seed_sample_content: false,
    }
}

/// Build the full application router over any content gateway.
///
/// Goes through `build_app_router`, so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_app_with<G>(gateway: Arc<G>) -> Router
where
    G: Gateway<Content, ContentDto> + 'static,
{
    let config = test_config();
    let state = AppState::new(ContentService::new(gateway), config.clone());
    build_app_router(state, &config)
}

/// Router over a fresh in-memory store, plus a handle to that store.
pub fn build_test_app() -> (Router, Arc<InMemoryGateway>) {
    let gateway = Arc::new(InMemoryGateway::new());
    (build_app_with(Arc::clone(&gateway)), gateway)
}

/// Router whose store fails every call.
pub fn build_failing_app() -> Router {
    build_app_with(Arc::new(FailingGateway))
}

/// Router whose store refuses creates without raising.
pub fn build_refusing_app() -> Router {
    build_app_with(Arc::new(RefusingGateway::default()))
}

// ---------------------------------------------------------------------------
// Fake gateways
// ---------------------------------------------------------------------------

/// Stand-in for a driver-level connection error.
#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
pub struct StoreDown;

/// Every call fails as if the database were unreachable.
pub struct FailingGateway;

#[async_trait]
impl Gateway<Content, ContentDto> for FailingGateway {
    async fn read_all(&self) -> CoreResult<Vec<Content>> {
        Err(CoreError::store(StoreDown))
    }
    async fn read(&self, _id: ContentId) -> CoreResult<Option<Content>> {
        Err(CoreError::store(StoreDown))
    }
    async fn create(&self, _dto: ContentDto) -> CoreResult<Option<Content>> {
        Err(CoreError::store(StoreDown))
    }
    async fn update(&self, _id: ContentId, _dto: ContentDto) -> CoreResult<Option<Content>> {
        Err(CoreError::store(StoreDown))
    }
    async fn delete(&self, _id: ContentId) -> CoreResult<ContentId> {
        Err(CoreError::store(StoreDown))
    }
}

/// Behaves like the in-memory store except that `create` yields nothing.
#[derive(Default)]
pub struct RefusingGateway {
    inner: InMemoryGateway,
}

#[async_trait]
impl Gateway<Content, ContentDto> for RefusingGateway {
    async fn read_all(&self) -> CoreResult<Vec<Content>> {
        self.inner.read_all().await
    }
    async fn read(&self, id: ContentId) -> CoreResult<Option<Content>> {
        self.inner.read(id).await
    }
    async fn create(&self, _dto: ContentDto) -> CoreResult<Option<Content>> {
        Ok(None)
    }
    async fn update(&self, id: ContentId, dto: ContentDto) -> CoreResult<Option<Content>> {
        self.inner.update(id, dto).await
    }
    async fn delete(&self, id: ContentId) -> CoreResult<ContentId> {
        self.inner.delete(id).await
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
