//! Request method and query string validation
//!
//! Every endpoint declares the HTTP methods it accepts and the query
//! parameters it requires or tolerates. Anything else is rejected before
//! the handler touches the catalog.

use crate::error::ServerError;
use axum::http::Method;

/// Decoded query parameters in request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Decode a raw, percent-encoded query string
    pub fn parse(raw_query: Option<&str>) -> Self {
        let pairs = raw_query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self(pairs)
    }

    /// First value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parameter names in request order, repeats included
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Check the request method and query parameters
///
/// Required parameters must be present with a non-empty value. Any parameter
/// that is neither required nor optional is an error.
pub fn check_query(
    method: &Method,
    raw_query: Option<&str>,
    allowed_methods: &[Method],
    required: &[&str],
    optional: &[&str],
) -> Result<QueryParams, ServerError> {
    if !allowed_methods.contains(method) {
        return Err(ServerError::MethodNotAllowed(format!(
            "method {} not allowed, expected one of: {}",
            method,
            allowed_methods
                .iter()
                .map(Method::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    let params = QueryParams::parse(raw_query);

    for key in required {
        if params.get(key).map_or(true, str::is_empty) {
            return Err(ServerError::InvalidRequest(format!(
                "missing required query parameter: {}",
                key
            )));
        }
    }

    if let Some(extra) = params
        .keys()
        .find(|k| !required.contains(k) && !optional.contains(k))
    {
        return Err(ServerError::InvalidRequest(format!(
            "invalid query parameter: {}",
            extra
        )));
    }

    Ok(params)
}
