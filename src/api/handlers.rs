//! API Handlers
//!
//! HTTP request handlers for each demo endpoint. Every handler builds its
//! own [`CacheHeaders`]; nothing cache-related lives in shared state.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::config::Config;
use crate::directive::{Expiry, Input};
use crate::directives;
use crate::error::Result;
use crate::models::{parse_expiry, CacheHeadersResponse, DirectiveQuery, HealthResponse};
use crate::response::CacheHeaders;

/// Response type shared by the header-building handlers.
pub type CacheHeadersReply = (CacheHeaders, Json<CacheHeadersResponse>);

/// Application state shared across all handlers.
///
/// Holds read-only configuration only.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.clone())
    }
}

fn reply(headers: CacheHeaders) -> CacheHeadersReply {
    let body = CacheHeadersResponse::from_headers(&headers);
    debug!(
        cache_control = %body.cache_control,
        expires = ?body.expires,
        "Built cache headers"
    );
    (headers, Json(body))
}

/// Handler for GET /cache-control
///
/// Applies the query pairs, in order, as `Cache-Control` directives.
pub async fn cache_control_handler(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<CacheHeadersReply> {
    let query = DirectiveQuery::new(pairs);
    let mut headers = CacheHeaders::new();
    headers.cache_control(query.to_inputs()?);

    Ok(reply(headers))
}

/// Handler for GET /expires
///
/// Expires after the configured default, forwarding query directives.
pub async fn expires_default_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<CacheHeadersReply> {
    let amount = Expiry::from(state.config.default_max_age);
    expires_reply(amount, &DirectiveQuery::new(pairs))
}

/// Handler for GET /expires/:amount
///
/// `amount` is either seconds or an RFC 3339 timestamp.
pub async fn expires_handler(
    Path(amount): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<CacheHeadersReply> {
    let amount = parse_expiry(&amount)?;
    expires_reply(amount, &DirectiveQuery::new(pairs))
}

fn expires_reply(amount: Expiry, query: &DirectiveQuery) -> Result<CacheHeadersReply> {
    let inputs: Vec<Input<'_>> = query.to_inputs()?;
    let mut headers = CacheHeaders::new();
    headers.expires(amount, inputs);

    Ok(reply(headers))
}

/// Handler for GET /health
///
/// Returns health status of the server; never cacheable.
pub async fn health_handler() -> (CacheHeaders, Json<HealthResponse>) {
    let mut headers = CacheHeaders::new();
    headers.cache_control(directives![no_store]);
    (headers, Json(HealthResponse::healthy()))
}
