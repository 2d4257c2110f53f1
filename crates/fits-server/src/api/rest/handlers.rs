//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::query::check_query;
use super::types::*;
use crate::error::ServerError;
use axum::{
    body::Body,
    extract::{RawQuery, State},
    http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use fits_catalog::{Catalog, METHOD_CONTENT_TYPE};
use tracing::{debug, error, warn};

/// Query parameters accepted by `/method`
pub const METHOD_OPTIONAL_PARAMS: &[&str] = &["typeID"];

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Method list endpoint
///
/// `GET /method?typeID=<optional>`
#[axum::debug_handler]
pub(super) async fn method(
    State(state): State<AppState>,
    http_method: Method,
    RawQuery(query): RawQuery,
) -> Result<Response, ServerError> {
    let mut headers = HeaderMap::new();
    let mut body = Vec::new();

    method_list(
        state.catalog.as_ref(),
        &http_method,
        query.as_deref(),
        &mut headers,
        &mut body,
    )
    .await?;

    Ok((StatusCode::OK, headers, Body::from(body)).into_response())
}

/// Look up methods, optionally restricted to one observation type
///
/// On success `body` holds the catalog's JSON document exactly as the store
/// produced it. On error `body` is left untouched; `headers` carries the
/// content type once the request has passed validation.
pub async fn method_list(
    catalog: &dyn Catalog,
    http_method: &Method,
    raw_query: Option<&str>,
    headers: &mut HeaderMap,
    body: &mut Vec<u8>,
) -> Result<(), ServerError> {
    let params = check_query(
        http_method,
        raw_query,
        &[Method::GET],
        &[],
        METHOD_OPTIONAL_PARAMS,
    )?;

    headers.insert(CONTENT_TYPE, HeaderValue::from_static(METHOD_CONTENT_TYPE));

    let type_id = params.get("typeID").unwrap_or_default();

    if !type_id.is_empty() {
        catalog.valid_type(type_id).await.map_err(|e| {
            if e.is_unknown_type() {
                warn!("Rejected method lookup: {}", e);
            } else {
                error!("Type validation failed for {}: {}", type_id, e);
            }
            ServerError::from(e)
        })?;
    }

    let result = if type_id.is_empty() {
        debug!("Listing all methods");
        catalog.all_methods().await
    } else {
        debug!("Listing methods for type {}", type_id);
        catalog.methods_for_type(type_id).await
    };

    let document = result.map_err(|e| {
        error!("Method lookup failed: {}", e);
        ServerError::from(e)
    })?;

    body.extend_from_slice(document.as_bytes());

    Ok(())
}
