// src/shared/api/extractor_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::InternalError;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

/// Malformed or mistyped JSON bodies answer with the standard error envelope.
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
        InternalError::from_response(err, ApiResponse::bad_request("INVALID_QUERY", &message))
            .into()
    })
}

/// Typed path segments (e.g. a numeric step) that fail to parse become 400 instead of 404.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, ApiResponse::bad_request("INVALID_PATH", &message))
            .into()
    })
}
