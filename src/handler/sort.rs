//! `/sort` endpoint module
//!
//! Parses the four measurement fields from a JSON body (POST) or query
//! parameters (GET), validates them, and renders the classification.
//! The classifier only runs once every field has validated.

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response, StatusCode};
use serde::Serialize;
use std::collections::HashMap;

use crate::config::HttpConfig;
use crate::http::response::{bad_request, json_response, unprocessable_entity};
use crate::sorter::{self, FieldError, Measurement, RawField, Stack};

/// Successful sort: the chosen stack plus the measurement echoed back
/// exactly as given.
#[derive(Debug, Serialize)]
struct SortResponse {
    stack: Stack,
    #[serde(flatten)]
    measurement: Measurement,
}

/// Why a sort request could not produce a measurement
#[derive(Debug)]
enum SortRequestError {
    /// Body was not a JSON object at all
    Malformed(String),
    /// Object decoded, but one or more fields failed validation
    Invalid(Vec<FieldError>),
}

/// Handle `POST /sort` with a JSON body
pub async fn sort_from_body(req: Request<Incoming>, http: &HttpConfig) -> Response<Full<Bytes>> {
    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return bad_request("Failed to read request body"),
    };

    match measurement_from_json(&body) {
        Ok(measurement) => respond(measurement, http),
        Err(SortRequestError::Malformed(message)) => bad_request(&message),
        Err(SortRequestError::Invalid(errors)) => unprocessable_entity(&errors),
    }
}

/// Handle `GET /sort` with the four fields as query parameters
pub fn sort_from_query(query: Option<&str>, http: &HttpConfig) -> Response<Full<Bytes>> {
    match measurement_from_query(query) {
        Ok(measurement) => respond(measurement, http),
        Err(errors) => unprocessable_entity(&errors),
    }
}

/// Classify and render a validated measurement
fn respond(measurement: Measurement, http: &HttpConfig) -> Response<Full<Bytes>> {
    let stack = sorter::classify(&measurement);
    json_response(StatusCode::OK, &SortResponse { stack, measurement }, http)
}

/// Extract a measurement from a JSON object body.
///
/// A body that is not a JSON object is malformed; a decoded object with
/// missing, non-numeric, or negative fields is invalid, with every
/// offending field reported.
fn measurement_from_json(body: &[u8]) -> Result<Measurement, SortRequestError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| SortRequestError::Malformed(format!("Invalid JSON: {e}")))?;

    let Some(object) = value.as_object() else {
        return Err(SortRequestError::Malformed(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let raw = |name: &str| match object.get(name) {
        None => RawField::Missing,
        Some(v) => v.as_f64().map_or(RawField::NotNumeric, RawField::Value),
    };

    Measurement::validate(raw("width"), raw("height"), raw("length"), raw("mass"))
        .map_err(SortRequestError::Invalid)
}

/// Extract a measurement from URL query parameters.
///
/// Pairs are percent-decoded; a repeated parameter keeps the last value.
fn measurement_from_query(query: Option<&str>) -> Result<Measurement, Vec<FieldError>> {
    let pairs: HashMap<String, String> = url::form_urlencoded::parse(query.unwrap_or("").as_bytes())
        .into_owned()
        .collect();

    let raw = |name: &str| match pairs.get(name) {
        None => RawField::Missing,
        Some(s) => s.parse::<f64>().map_or(RawField::NotNumeric, RawField::Value),
    };

    Measurement::validate(raw("width"), raw("height"), raw("length"), raw("mass"))
}
