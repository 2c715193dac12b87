//! Request routing dispatch module
//!
//! Entry point for request processing: method validation, route matching,
//! uniform header-policy application, and access logging.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http::{self, headers};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating what the route handlers need
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let version = format!("{:?}", req.version());
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");
    let if_none_match = header_string(&req, "if-none-match");

    let access_log = state.config.logging.access_log;
    let ctx = RequestContext {
        path: &path,
        is_head: method == Method::HEAD,
        if_none_match,
        access_log,
    };

    let response = dispatch(&method, &ctx, &state).await;

    if access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.ip().to_string(),
            time: chrono::Local::now(),
            method: method.to_string(),
            path,
            query,
            http_version: version,
            status: response.status().as_u16(),
            body_bytes: content_length(&response),
            referer,
            user_agent,
            request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Validate the method, route the request, and stamp the header policy.
///
/// Every response leaves through this function, so the permission/CORS
/// headers are guaranteed on all routes including errors and preflights.
pub async fn dispatch(
    method: &Method,
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let mut response = match check_http_method(method, &state.config.headers.cors_origin) {
        Some(early) => early,
        None => route(ctx, state).await,
    };
    headers::apply_policy(&mut response, &state.config.headers);
    response
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method, cors_origin: &str) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(cors_origin)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route the request by path.
///
/// API paths get JSON responses (including JSON 404s); everything else is
/// the static bundle with the SPA index fallback.
async fn route(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    if ctx.path == "/health" {
        return api::handle_health(state, ctx.is_head);
    }
    if ctx.path == "/api" || ctx.path.starts_with("/api/") {
        return api::dispatch(ctx.path, state, ctx.is_head);
    }
    static_files::serve(ctx, &state.config.paths.static_root).await
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn content_length<B>(response: &Response<B>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageCatalog, ImageRecord};
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn test_state(records: Vec<ImageRecord>) -> AppState {
        let mut catalog = ImageCatalog::default();
        for record in records {
            catalog.push(record);
        }
        AppState::new(Config::load_from("__no_such_config__").unwrap(), catalog)
    }

    fn ctx(path: &str) -> RequestContext<'_> {
        RequestContext {
            path,
            is_head: false,
            if_none_match: None,
            access_log: false,
        }
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_policy_headers(response: &Response<Full<Bytes>>) {
        assert_eq!(
            response.headers()["cross-origin-opener-policy"],
            "same-origin-allow-popups"
        );
        assert_eq!(
            response.headers()["permissions-policy"],
            "camera=(self), microphone=(self)"
        );
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_health_route() {
        let state = test_state(vec![ImageRecord {
            name: "rope".to_string(),
            data_uri: "data:image/png;base64,AA==".to_string(),
        }]);

        let response = dispatch(&Method::GET, &ctx("/health"), &state).await;
        assert_eq!(response.status(), 200);
        assert_policy_headers(&response);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["chains"], 1);
    }

    #[tokio::test]
    async fn test_api_health_alias() {
        let state = test_state(Vec::new());
        let response = dispatch(&Method::GET, &ctx("/api/health"), &state).await;
        assert_eq!(response.status(), 200);
        assert_eq!(body_json(response).await["chains"], 0);
    }

    #[tokio::test]
    async fn test_chains_route_empty() {
        let state = test_state(Vec::new());
        let response = dispatch(&Method::GET, &ctx("/api/chains"), &state).await;
        assert_eq!(response.status(), 200);
        assert_policy_headers(&response);

        let json = body_json(response).await;
        assert_eq!(json["chains"], serde_json::json!([]));
        assert_eq!(json["names"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unknown_api_route_is_json_404() {
        let state = test_state(Vec::new());
        let response = dispatch(&Method::GET, &ctx("/api/unknown"), &state).await;
        assert_eq!(response.status(), 404);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_policy_headers(&response);

        let json = body_json(response).await;
        assert_eq!(json["error"], "not found");
    }

    #[tokio::test]
    async fn test_405_still_carries_policy() {
        let state = test_state(Vec::new());
        let response = dispatch(&Method::POST, &ctx("/api/chains"), &state).await;
        assert_eq!(response.status(), 405);
        assert_policy_headers(&response);
    }

    #[tokio::test]
    async fn test_options_preflight_carries_policy() {
        let state = test_state(Vec::new());
        let response = dispatch(&Method::OPTIONS, &ctx("/anything"), &state).await;
        assert_eq!(response.status(), 204);
        assert_policy_headers(&response);
    }

    #[tokio::test]
    async fn test_static_route_carries_policy() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("index.html"), b"<html>app</html>").unwrap();

        let mut state = test_state(Vec::new());
        state.config.paths.static_root = tmp.path().to_str().unwrap().to_string();

        let response = dispatch(&Method::GET, &ctx("/some/client/route"), &state).await;
        assert_eq!(response.status(), 200);
        assert_policy_headers(&response);
    }
}
