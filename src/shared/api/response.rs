// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::validation::FieldError;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Error body: `{ success: false, error, code, details? }`
#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Success envelope for endpoints whose payload sits next to `success`
/// instead of under `data` (e.g. `{ success, token, user }`).
#[derive(Serialize)]
struct Envelope<B: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: B,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: None,
            data: Some(data),
        })
    }

    pub fn created(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        })
    }

    pub fn success_with_message(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            message: Some(message.to_string()),
            data: None,
        })
    }

    pub fn body<B: Serialize>(status: StatusCode, body: B) -> HttpResponse {
        HttpResponse::build(status).json(Envelope {
            success: true,
            body,
        })
    }

    pub fn ok_body<B: Serialize>(body: B) -> HttpResponse {
        Self::body(StatusCode::OK, body)
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            success: false,
            error: message.to_string(),
            code: code.to_string(),
            details: None,
        })
    }

    pub fn validation_error(message: &str, details: Vec<FieldError>) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiError {
            success: false,
            error: message.to_string(),
            code: "VALIDATION_ERROR".to_string(),
            details: Some(details),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn service_unavailable(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::SERVICE_UNAVAILABLE, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn success_wraps_data() {
        let resp = ApiResponse::success(json!({ "id": 1 }));
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert!(body.get("message").is_none());
    }

    #[actix_web::test]
    async fn ok_body_flattens_fields_next_to_success() {
        #[derive(Serialize)]
        struct Body {
            token: &'static str,
            count: u32,
        }

        let body = body_json(ApiResponse::ok_body(Body {
            token: "abc",
            count: 2,
        }))
        .await;

        assert_eq!(body, json!({ "success": true, "token": "abc", "count": 2 }));
    }

    #[actix_web::test]
    async fn error_body_has_message_and_code() {
        let resp = ApiResponse::not_found("JOB_NOT_FOUND", "Job not found");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Job not found");
        assert_eq!(body["code"], "JOB_NOT_FOUND");
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn validation_error_lists_field_details() {
        let resp = ApiResponse::validation_error(
            "Invalid data",
            vec![FieldError::new("url", "Invalid URL")],
        );
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["details"][0]["field"], "url");
        assert_eq!(body["details"][0]["message"], "Invalid URL");
    }
}
