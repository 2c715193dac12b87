//! Static file serving module
//!
//! Serves the prebuilt SPA bundle from the configured static root. Any path
//! that does not resolve to a real file under the root falls back to the
//! index document so client-side routes survive full page loads.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Serve a non-API path: static asset if it exists, SPA index otherwise.
pub async fn serve(ctx: &RequestContext<'_>, static_root: &str) -> Response<Full<Bytes>> {
    if let Some((content, content_type)) = load_from_root(static_root, ctx.path).await {
        if ctx.access_log {
            logger::log_response(content.len());
        }
        let etag = cache::generate_etag(&content);
        if cache::etag_matches(ctx.if_none_match.as_deref(), &etag) {
            return http::build_304_response(&etag);
        }
        return http::build_static_response(Bytes::from(content), content_type, &etag, ctx.is_head);
    }

    serve_index(ctx, static_root).await
}

/// SPA fallback: the index document, or a built-in placeholder when the
/// bundle is missing entirely (the process still answers, per the
/// degrade-don't-die policy).
async fn serve_index(ctx: &RequestContext<'_>, static_root: &str) -> Response<Full<Bytes>> {
    let index_path = Path::new(static_root).join(INDEX_FILE);
    match fs::read(&index_path).await {
        Ok(content) => {
            if ctx.access_log {
                logger::log_response(content.len());
            }
            http::build_index_response(Bytes::from(content), ctx.is_head)
        }
        Err(e) => {
            logger::log_warning(&format!(
                "SPA index '{}' unavailable: {e}",
                index_path.display()
            ));
            http::build_index_response(Bytes::from(placeholder_page()), ctx.is_head)
        }
    }
}

/// Resolve a request path to a file strictly inside the static root.
///
/// Both the root and the candidate are canonicalized; a resolved path that
/// escapes the canonical root is rejected. Returns `None` for misses so the
/// caller can apply the SPA fallback.
async fn load_from_root(static_root: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = path.trim_start_matches('/');
    if relative.is_empty() {
        return None;
    }

    // Filenames with spaces or non-ASCII arrive percent-encoded; decode
    // before resolving so such assets are servable at all. The canonicalize
    // guard below runs on the decoded path, so %2e%2e sequences stay blocked.
    let relative = match urlencoding::decode(relative) {
        Ok(decoded) => decoded,
        Err(_) => return None,
    };
    let relative = relative.as_ref();

    let root_canonical = match Path::new(static_root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root '{static_root}' not found or inaccessible: {e}"
            ));
            return None;
        }
    };

    let candidate = root_canonical.join(relative);
    // Misses are routine (SPA routes), not worth logging.
    let candidate = candidate.canonicalize().ok()?;
    if !candidate.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            candidate.display()
        ));
        return None;
    }
    if !candidate.is_file() {
        return None;
    }

    let content = match fs::read(&candidate).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read static file '{}': {e}",
                candidate.display()
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(candidate.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

fn placeholder_page() -> String {
    String::from(
        r"<!DOCTYPE html>
<html>
<head><title>Chain Fit Studio</title></head>
<body>
<h1>Chain Fit Studio</h1>
<p>The front-end bundle has not been built yet. Run the front-end build and
place its output in the configured static root.</p>
</body>
</html>",
    )
}
