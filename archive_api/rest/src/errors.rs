use archive_models::auth::AuthenticateError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

pub fn auth_error(err: AuthenticateError) -> Response {
    match err {
        AuthenticateError::InvalidToken => error(StatusCode::UNAUTHORIZED, "Invalid token"),
    }
}

pub fn error(code: StatusCode, detail: impl Into<String>) -> Response {
    (
        code,
        Json(ApiError {
            detail: detail.into(),
        }),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub detail: String,
}
