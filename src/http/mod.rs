//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by static file serving and the JSON API:
//! MIME detection, cache validation, response builders, and the fixed header
//! policy.

pub mod cache;
pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_405_response, build_index_response, build_options_response,
    build_static_response,
};
