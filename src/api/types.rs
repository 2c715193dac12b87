// JSON body shapes for the read-only API

use crate::catalog::ImageRecord;
use serde::Serialize;

/// Full catalog payload for `GET /api/chains`.
///
/// Borrows straight from the process-wide catalog; nothing is copied per
/// request beyond the serialized bytes.
#[derive(Debug, Serialize)]
pub struct ChainsResponse<'a> {
    pub chains: &'a [ImageRecord],
    pub names: &'a [String],
}

/// Liveness payload for `GET /health` and `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub chains: usize,
}

/// Structured error body for unmatched API routes.
#[derive(Debug, Serialize)]
pub struct ApiError<'a> {
    pub error: &'a str,
    pub path: &'a str,
}
