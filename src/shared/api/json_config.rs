// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::InternalError;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
            .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_QUERY_PARAMS", &message),
        )
        .into()
    })
}

/// Ids in the path are UUIDs; anything else is rejected before the handler runs.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_ID", "Malformed resource id"),
        )
        .into()
    })
}
