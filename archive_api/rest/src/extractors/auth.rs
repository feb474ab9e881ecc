use std::convert::Infallible;

use archive_models::auth::AccessToken;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Extract an optional Bearer access token from the Authorization header
pub struct ApiToken(pub Option<AccessToken>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ApiToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|x| x.to_str().ok())
                .map(|x| x.strip_prefix("Bearer ").unwrap_or(x))
                .map(Into::into),
        ))
    }
}
