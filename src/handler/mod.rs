//! Request handler module
//!
//! Routing dispatch plus static/SPA serving. The JSON endpoints live in
//! `crate::api`; this module decides which side of the split a request
//! belongs to.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
