use thiserror::Error;

/// Bearer token sent by a client in the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum AuthenticateError {
    #[error("The access token is invalid or has expired.")]
    InvalidToken,
}
