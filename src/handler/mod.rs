//! Request handler module
//!
//! Dispatches HTTP requests to the sorting endpoints and renders the
//! request/response envelope around the pure classifier.

mod info;
mod router;
mod sort;

// Re-export main entry point
pub use router::handle_request;
