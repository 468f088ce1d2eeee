//! Response shaping.
//!
//! # Responsibilities
//! - Wrap domain values (strings, lists, maps) in the JSON envelope
//! - Own status codes; handlers never build raw responses
//!
//! # Design Decisions
//! - Every body is `{"status": "success" | "error", "message": ...}`;
//!   error bodies also carry a numeric `code`
//! - Absence (no breed to pick from) renders as 404, not as an empty success

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::catalog::{BreedMap, ImageWithAlt};

fn success<T: Serialize>(message: T) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "status": "success", "message": message })),
    )
        .into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "status": "error",
            "message": message,
            "code": status.as_u16(),
        })),
    )
        .into_response()
}

/// A single string value (breed name, image key).
pub fn success_text(message: &str) -> Response {
    success(message)
}

/// A flat list of strings.
pub fn success_list(message: Vec<String>) -> Response {
    success(message)
}

/// A breed → sub-breeds map, in its current key order.
pub fn success_map(message: BreedMap) -> Response {
    success(message)
}

/// Image keys paired with alt text.
pub fn success_alt(message: Vec<ImageWithAlt>) -> Response {
    success(message)
}

/// Requested breed (or random selection) does not exist.
pub fn breed_not_found() -> Response {
    error(
        StatusCode::NOT_FOUND,
        "Breed not found (master breed does not exist)",
    )
}

/// No route template matched the request path.
pub fn route_not_found() -> Response {
    error(StatusCode::NOT_FOUND, "No route matched")
}

/// Malformed path parameter (non-numeric or negative count).
pub fn bad_request(reason: &str) -> Response {
    error(StatusCode::BAD_REQUEST, reason)
}

/// Object-storage listing failed; nothing the client can do about it.
pub fn upstream_error() -> Response {
    error(StatusCode::BAD_GATEWAY, "Object storage listing failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_text_envelope() {
        let response = success_text("boxer");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "boxer");
    }

    #[tokio::test]
    async fn test_success_map_preserves_key_order() {
        let mut map = BreedMap::new();
        map.insert("husky".to_string(), vec!["siberian".to_string()]);
        map.insert("boxer".to_string(), Vec::new());
        let body = body_json(success_map(map)).await;
        assert_eq!(body["message"]["husky"][0], "siberian");
        assert_eq!(body["message"]["boxer"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_breed_not_found_shape() {
        let response = breed_not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn test_bad_request_carries_reason() {
        let response = bad_request("count must be a non-negative integer");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "count must be a non-negative integer");
    }
}
