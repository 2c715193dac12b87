// Read-only API handlers: chain catalog and health

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::json_response;
use super::types::{ChainsResponse, HealthResponse};
use crate::config::AppState;

/// `GET /api/chains` — the complete catalog, identical between calls.
pub fn handle_chains(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let body = ChainsResponse {
        chains: state.catalog.records(),
        names: state.catalog.names(),
    };
    json_response(StatusCode::OK, &body, is_head)
}

/// `GET /health` and `GET /api/health` — liveness plus catalog size.
///
/// Reads nothing but the in-memory count, so it stays cheap enough for
/// aggressive poll intervals.
pub fn handle_health(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let body = HealthResponse {
        status: "ok",
        chains: state.catalog.len(),
    };
    json_response(StatusCode::OK, &body, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageCatalog, ImageRecord};
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn state_with(records: Vec<ImageRecord>) -> AppState {
        let mut catalog = ImageCatalog::default();
        for record in records {
            catalog.push(record);
        }
        AppState::new(Config::load_from("__no_such_config__").unwrap(), catalog)
    }

    fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let collected = rt.block_on(async move { response.into_body().collect().await.unwrap() });
        serde_json::from_slice(&collected.to_bytes()).unwrap()
    }

    #[test]
    fn test_chains_empty_catalog() {
        let state = state_with(Vec::new());
        let response = handle_chains(&state, false);
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response);
        assert_eq!(json["chains"], serde_json::json!([]));
        assert_eq!(json["names"], serde_json::json!([]));
    }

    #[test]
    fn test_chains_full_catalog() {
        let state = state_with(vec![
            ImageRecord {
                name: "cuban".to_string(),
                data_uri: "data:image/png;base64,AAECAw==".to_string(),
            },
            ImageRecord {
                name: "figaro".to_string(),
                data_uri: "data:image/jpeg;base64,BA==".to_string(),
            },
        ]);

        let json = body_json(handle_chains(&state, false));
        assert_eq!(json["names"], serde_json::json!(["cuban", "figaro"]));
        assert_eq!(json["chains"][0]["name"], "cuban");
        assert_eq!(json["chains"][0]["data"], "data:image/png;base64,AAECAw==");
        assert_eq!(json["chains"][1]["name"], "figaro");
    }

    #[test]
    fn test_health_reports_count() {
        let state = state_with(vec![ImageRecord {
            name: "rope".to_string(),
            data_uri: "data:image/png;base64,AA==".to_string(),
        }]);

        let json = body_json(handle_health(&state, false));
        assert_eq!(json["status"], "ok");
        assert_eq!(json["chains"], 1);
    }
}
