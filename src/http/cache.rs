//! HTTP cache control module
//!
//! `ETag` generation and `If-None-Match` handling for the static bundle.

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

/// Generate a quoted `ETag` from content bytes.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    hasher.write_usize(content.len());
    hasher.write(content);
    format!("\"{:x}\"", hasher.finish())
}

/// Whether the client's `If-None-Match` value matches `etag`.
///
/// Handles comma-separated lists and the `*` wildcard.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client| {
        client.split(',').any(|e| {
            let e = e.trim();
            e == etag || e == "*"
        })
    })
}
