use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Client supplied id that groups the requests of one browser session.
pub struct CorrelationId(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .headers
                .get(CORRELATION_ID_HEADER)
                .map(|x| String::from_utf8_lossy(x.as_bytes()).into_owned()),
        ))
    }
}
