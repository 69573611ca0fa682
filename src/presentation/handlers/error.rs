use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::presentation::config::ConfigError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Configuration problems get their own body shape so clients can route
/// the user to credential setup instead of showing a generic failure.
#[derive(Serialize)]
pub struct ConfigErrorResponse {
    pub config_error: String,
    pub hint: String,
}

pub fn config_error_response(error: &ConfigError) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ConfigErrorResponse {
            config_error: error.to_string(),
            hint: "create a .env file with your OPENAI_API_KEY or export it before starting"
                .to_string(),
        }),
    )
        .into_response()
}
