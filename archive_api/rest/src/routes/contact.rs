use std::sync::Arc;

use archive_core_contact_contracts::{
    notification::ContactNotifyError, ContactCreateError, ContactFeatureService,
};
use archive_models::contact::ContactRequestMetadata;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Router,
};

use crate::{
    errors::{auth_error, error, internal_server_error},
    extractors::{
        accept_language::AcceptLanguage, auth::ApiToken, correlation_id::CorrelationId,
        user_agent::UserAgent,
    },
    models::contact::ApiContactSubmission,
};

pub const CONTACTUS_PATH: &str = "/api/tools/contactus";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            CONTACTUS_PATH,
            routing::post(create)
                .get(list)
                .put(update)
                .patch(update)
                .delete(delete),
        )
        .route(
            &format!("{CONTACTUS_PATH}/:id"),
            routing::get(get).put(update).patch(update).delete(delete),
        )
        .with_state(service)
}

async fn create(
    service: State<Arc<impl ContactFeatureService>>,
    ApiToken(token): ApiToken,
    UserAgent(user_agent): UserAgent,
    CorrelationId(correlation_id): CorrelationId,
    AcceptLanguage(locale): AcceptLanguage,
    body: Bytes,
) -> Response {
    if !service.is_enabled() {
        return disabled();
    }

    let submission = match serde_json::from_slice::<ApiContactSubmission>(&body) {
        Ok(submission) => submission,
        Err(err) => {
            return error(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Error parsing the body: {err}"),
            )
        }
    };

    let metadata = ContactRequestMetadata {
        correlation_id,
        user_agent,
        locale,
    };

    match service
        .create_contact_request(token, submission.into(), metadata)
        .await
    {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(ContactCreateError::Disabled) => disabled(),
        Err(ContactCreateError::MissingFields) => error(
            StatusCode::BAD_REQUEST,
            "e-mail and message fields are mandatory!",
        ),
        Err(ContactCreateError::Auth(err)) => auth_error(err),
        Err(ContactCreateError::Notify(ContactNotifyError::Rejected)) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
        Err(ContactCreateError::Notify(err)) => internal_server_error(err),
    }
}

async fn list() -> Response {
    unsupported("list")
}

async fn get() -> Response {
    unsupported("get")
}

async fn update() -> Response {
    unsupported("update")
}

async fn delete() -> Response {
    unsupported("delete")
}

fn disabled() -> Response {
    error(
        StatusCode::NOT_FOUND,
        "Contactus cannot be sent at this time, Contactus recipient is disabled",
    )
}

fn unsupported(operation: &str) -> Response {
    error(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("contactus: {operation} is not supported"),
    )
}
