//! HTTP response building module
//!
//! Builders for the response shapes the server emits, decoupled from routing
//! logic. Builder failures degrade to a bare response after logging; the
//! request path never panics.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response for a static file, with `ETag` and cache headers.
pub fn build_static_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build HTML response for the SPA index document.
///
/// The index is deliberately uncached so a redeployed bundle takes effect on
/// the next full page load.
pub fn build_index_response(content: Bytes, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head { Bytes::new() } else { content };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .header("Cache-Control", "no-cache")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("index", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(cors_origin: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .header("Access-Control-Allow-Origin", cors_origin)
        .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .header("Access-Control-Max-Age", "86400")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_response_headers() {
        let response =
            build_static_response(Bytes::from_static(b"body{}"), "text/css", "\"abc\"", false);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "text/css");
        assert_eq!(response.headers()["ETag"], "\"abc\"");
        assert_eq!(response.headers()["Content-Length"], "6");
    }

    #[test]
    fn test_head_keeps_content_length() {
        let response =
            build_static_response(Bytes::from_static(b"123456"), "text/css", "\"abc\"", true);
        assert_eq!(response.headers()["Content-Length"], "6");
    }

    #[test]
    fn test_index_is_uncached() {
        let response = build_index_response(Bytes::from_static(b"<html></html>"), false);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Cache-Control"], "no-cache");
    }

    #[test]
    fn test_405_lists_allowed_methods() {
        let response = build_405_response();
        assert_eq!(response.status(), 405);
        assert_eq!(response.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_options_preflight() {
        let response = build_options_response("*");
        assert_eq!(response.status(), 204);
        assert_eq!(response.headers()["Access-Control-Allow-Methods"], "GET, HEAD, OPTIONS");
    }
}
