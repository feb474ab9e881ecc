use std::sync::Arc;

use archive_core_health_contracts::{HealthFeatureService, HealthStatus};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let HealthStatus { email } = service.get_status().await;

    let status = if email {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(HealthResponse { http: true, email })).into_response()
}

#[cfg(test)]
mod tests {
    use archive_core_health_contracts::MockHealthFeatureService;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn ok() {
        for (email, status) in [
            (true, StatusCode::OK),
            (false, StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            // Arrange
            let service = MockHealthFeatureService::new().with_get_status(HealthStatus { email });
            let sut = router(service.into());

            // Act
            let response = sut
                .oneshot(Request::get("/health").body(Body::empty()).unwrap())
                .await
                .unwrap();

            // Assert
            assert_eq!(response.status(), status);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body = serde_json::from_slice::<serde_json::Value>(&body).unwrap();
            assert_eq!(body, serde_json::json!({"http": true, "email": email}));
        }
    }
}
