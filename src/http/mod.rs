//! HTTP protocol layer module
//!
//! Response builders shared by all handlers, decoupled from the sorting
//! business logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    bad_request, build_404_response, build_405_response, build_413_response,
    build_health_response, build_options_response, json_response, unprocessable_entity,
};
