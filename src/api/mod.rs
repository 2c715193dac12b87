// API module entry
// Read-only JSON endpoints backed by the startup image catalog

mod handlers;
mod response;
mod types;

pub use handlers::handle_health;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::logger;

/// Dispatch a request under `/api/` to its handler.
///
/// Method filtering happens upstream in the router, so everything arriving
/// here is GET or HEAD. Unknown paths get a structured JSON 404 rather than
/// the SPA fallback, since API callers expect machine-readable errors.
pub fn dispatch(path: &str, state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let method = if is_head { "HEAD" } else { "GET" };
    let response = match path {
        "/api/chains" => handlers::handle_chains(state, is_head),
        "/api/health" => handlers::handle_health(state, is_head),
        _ => response::not_found(path, is_head),
    };
    logger::log_api_request(method, path, response.status().as_u16());
    response
}
