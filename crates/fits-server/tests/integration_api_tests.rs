//! Integration tests for REST API endpoints
//!
//! These tests drive the real router against an in-memory catalog end-to-end.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use fits_catalog::{
    CatalogError, CatalogResult, InMemoryCatalog, Method, MethodList, MethodStore, TypeValidator,
};
use fits_server::api::create_router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Catalog with three types: `e` has two methods, `u` has one, `t` has none
fn create_test_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_type("e")
        .with_type("u")
        .with_type("t")
        .with_method(Method::new(
            "bernese5",
            "Bernese v5.0",
            "Bernese v5.0 GNS processing software",
            "http://www.bernese.unibe.ch/",
        ))
        .with_method(Method::new(
            "gamit",
            "GAMIT",
            "GAMIT/GLOBK processing software",
            "http://www-gpsg.mit.edu/",
        ))
        .with_link("e", "bernese5")
        .with_link("e", "gamit")
        .with_link("u", "bernese5")
}

fn create_test_router() -> Router {
    create_router(Arc::new(create_test_catalog()))
}

/// Catalog whose every query fails
struct BrokenCatalog;

#[async_trait]
impl TypeValidator for BrokenCatalog {
    async fn valid_type(&self, _type_id: &str) -> CatalogResult<()> {
        Ok(())
    }
}

#[async_trait]
impl MethodStore for BrokenCatalog {
    async fn all_methods(&self) -> CatalogResult<String> {
        Err(CatalogError::Other("connection reset".to_string()))
    }

    async fn methods_for_type(&self, _type_id: &str) -> CatalogResult<String> {
        Err(CatalogError::Other("connection reset".to_string()))
    }
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    (status, content_type, body)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, _, body) = send(create_test_router(), "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_all_methods() {
    let (status, content_type, body) = send(create_test_router(), "GET", "/method").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json;version=1"));

    let doc: MethodList = serde_json::from_slice(&body).unwrap();
    assert_eq!(doc.len(), 3);
}

#[tokio::test]
async fn test_empty_type_id_lists_all_methods() {
    let (_, _, all) = send(create_test_router(), "GET", "/method").await;
    let (status, _, empty) = send(create_test_router(), "GET", "/method?typeID=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, empty);
}

#[tokio::test]
async fn test_methods_for_type() {
    let (status, _, body) = send(create_test_router(), "GET", "/method?typeID=e").await;

    assert_eq!(status, StatusCode::OK);

    let doc: MethodList = serde_json::from_slice(&body).unwrap();
    let methods = doc.method.expect("type e has methods");
    assert_eq!(methods.len(), 2);
    for method in &methods {
        assert!(!method.method_id.is_empty());
        assert!(!method.name.is_empty());
    }
}

#[tokio::test]
async fn test_type_without_methods_is_null() {
    let (status, content_type, body) = send(create_test_router(), "GET", "/method?typeID=t").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json;version=1"));
    assert_eq!(body, br#"{"method":null}"#);
}

#[tokio::test]
async fn test_unknown_type_is_not_found() {
    let (status, _, body) = send(create_test_router(), "GET", "/method?typeID=nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], 404);
    assert!(json["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_non_get_methods_rejected() {
    for method in ["POST", "PUT", "DELETE", "PATCH"] {
        let (status, _, body) = send(create_test_router(), method, "/method").await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method {}", method);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 405);
    }
}

#[tokio::test]
async fn test_extra_query_parameter_rejected() {
    let (status, _, body) = send(create_test_router(), "GET", "/method?typeID=e&siteID=TAUP").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("siteID"));
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = create_router(Arc::new(BrokenCatalog));
    let (status, _, body) = send(app, "GET", "/method?typeID=e").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], 500);
    assert!(json.get("method").is_none());
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let app = create_test_router();

    let (_, _, first) = send(app.clone(), "GET", "/method?typeID=e").await;
    let (_, _, second) = send(app, "GET", "/method?typeID=e").await;

    assert_eq!(first, second);
}
