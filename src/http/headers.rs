//! Fixed response header policy
//!
//! Every response leaving the server carries the same permission and
//! cross-origin headers so the embedding page can use the camera and so the
//! API is callable from arbitrary origins during development. The values are
//! static configuration; nothing here is computed per request.

use crate::config::HeadersConfig;
use crate::logger;
use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

const OPENER_POLICY: HeaderName = HeaderName::from_static("cross-origin-opener-policy");
const PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");
const CORS_ORIGIN: HeaderName = HeaderName::from_static("access-control-allow-origin");

/// Attach the policy headers to an outgoing response.
///
/// A misconfigured value (non-ASCII, embedded control characters) is logged
/// and skipped; the remaining headers still apply.
pub fn apply_policy<B>(response: &mut Response<B>, policy: &HeadersConfig) {
    insert(response, OPENER_POLICY, &policy.opener_policy);
    insert(response, PERMISSIONS_POLICY, &policy.permissions_policy);
    insert(response, CORS_ORIGIN, &policy.cors_origin);
}

fn insert<B>(response: &mut Response<B>, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(v) => {
            response.headers_mut().insert(name, v);
        }
        Err(_) => {
            logger::log_warning(&format!("Invalid header value for {name}: '{value}'"));
        }
    }
}
