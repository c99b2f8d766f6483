//! Service metadata endpoint.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use crate::config::AppState;
use crate::http::response::json_response;

/// Handle `GET /` with informational service metadata
pub fn service_info(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "service": "Package Sorter API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Sort packages into STANDARD, SPECIAL, or REJECTED stacks",
        "uptime_seconds": state.uptime_seconds(),
    });

    json_response(StatusCode::OK, &body, &state.config.http)
}
