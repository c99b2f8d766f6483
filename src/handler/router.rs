//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: admission checks, method and
//! path dispatch, and access logging around the response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{HeaderMap, Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::{info, sort};
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    // Captured up front: the request may be consumed by a body-reading handler
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = http_version_label(req.version());
    let referer = header_value(req.headers(), "referer");
    let user_agent = header_value(req.headers(), "user-agent");

    let response = match check_body_size(req.headers(), state.config.http.max_body_size) {
        Some(resp) => resp,
        None => dispatch(req, &state).await,
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method, path);
        entry.query = query;
        entry.http_version = http_version;
        entry.status = response.status().as_u16();
        entry.body_bytes = body_size(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method and path
async fn dispatch(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/") => info::service_info(state),
        (&Method::GET, "/healthz" | "/readyz") => http::build_health_response(),
        (&Method::GET, "/sort") => sort::sort_from_query(req.uri().query(), &state.config.http),
        (&Method::POST, "/sort") => sort::sort_from_body(req, &state.config.http).await,
        (&Method::OPTIONS, path) => match allowed_methods(path) {
            Some(allow) => http::build_options_response(state.config.http.enable_cors, allow),
            None => http::build_404_response(),
        },
        (method, path) => match allowed_methods(path) {
            Some(allow) => {
                logger::log_warning(&format!("Method not allowed: {method} {path}"));
                http::build_405_response(allow)
            }
            None => http::build_404_response(),
        },
    }
}

/// Methods accepted on a known path, `None` for unknown paths
fn allowed_methods(path: &str) -> Option<&'static str> {
    match path {
        "/sort" => Some("GET, POST, OPTIONS"),
        "/" | "/healthz" | "/readyz" => Some("GET, OPTIONS"),
        _ => None,
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = headers.get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Header value as an owned string, if present and valid UTF-8
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Exact response body size from its hyper size hint
fn body_size(response: &Response<Full<Bytes>>) -> u64 {
    use hyper::body::Body as _;
    response.body().size_hint().exact().unwrap_or(0)
}

/// Version label for access logs: "1.0", "1.1", "2.0"
fn http_version_label(version: hyper::Version) -> String {
    format!("{version:?}")
        .trim_start_matches("HTTP/")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;

    #[test]
    fn test_allowed_methods_known_paths() {
        assert_eq!(allowed_methods("/sort"), Some("GET, POST, OPTIONS"));
        assert_eq!(allowed_methods("/"), Some("GET, OPTIONS"));
        assert_eq!(allowed_methods("/healthz"), Some("GET, OPTIONS"));
        assert_eq!(allowed_methods("/readyz"), Some("GET, OPTIONS"));
    }

    #[test]
    fn test_allowed_methods_unknown_path() {
        assert_eq!(allowed_methods("/nope"), None);
        assert_eq!(allowed_methods("/sort/extra"), None);
    }

    #[test]
    fn test_check_body_size_within_limit() {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("512"));
        assert!(check_body_size(&headers, 1024).is_none());
    }

    #[test]
    fn test_check_body_size_exceeded() {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("2048"));
        let resp = check_body_size(&headers, 1024).unwrap();
        assert_eq!(resp.status(), 413);
    }

    #[test]
    fn test_check_body_size_missing_or_invalid_header() {
        let headers = HeaderMap::new();
        assert!(check_body_size(&headers, 1024).is_none());

        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("abc"));
        assert!(check_body_size(&headers, 1024).is_none());
    }

    #[test]
    fn test_http_version_label() {
        assert_eq!(http_version_label(hyper::Version::HTTP_11), "1.1");
        assert_eq!(http_version_label(hyper::Version::HTTP_10), "1.0");
        assert_eq!(http_version_label(hyper::Version::HTTP_2), "2.0");
    }
}
