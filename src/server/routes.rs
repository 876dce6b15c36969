//! Route handlers
//!
//! The POST handler is the single place a response envelope is written.
//! A body missing any of the four envelope members is rejected with
//! HTTP 400 before the dispatcher runs; everything after that boundary
//! answers HTTP 200 with an envelope.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::rpc::{QueryService, RpcRequest};

/// Build the RPC router over a shared service
pub fn rpc_routes(service: Arc<QueryService>) -> Router {
    Router::new()
        .route("/", get(list_vocabulary).post(execute))
        .route("/health", get(health))
        .with_state(service)
}

/// Liveness probe
async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Discovery listing: the approved vocabulary, one line per term
async fn list_vocabulary(State(service): State<Arc<QueryService>>) -> Json<Vec<String>> {
    Json(service.registry().display_listing())
}

/// The RPC execution call
async fn execute(State(service): State<Arc<QueryService>>, Json(body): Json<Value>) -> Response {
    match RpcRequest::parse(&body) {
        Ok(request) => Json(service.dispatch(request)).into_response(),
        Err(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
    }
}
