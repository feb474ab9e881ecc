use std::convert::Infallible;

use archive_models::locale::Locale;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};

/// The preferred locale of the client, if it sent a usable `Accept-Language`
/// header.
pub struct AcceptLanguage(pub Option<Locale>);

#[async_trait]
impl<S> FromRequestParts<S> for AcceptLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .headers
                .get(ACCEPT_LANGUAGE)
                .and_then(|x| x.to_str().ok())
                .and_then(Locale::from_accept_language),
        ))
    }
}
