use std::time::Duration;

use archive_auth_contracts::{AuthService, Authentication};
use archive_di::Build;
use archive_models::{
    auth::{AccessToken, AuthenticateError},
    email_address::EmailAddress,
    user::UserId,
};
use archive_shared_contracts::jwt::JwtService;
use archive_utils::trace_instrument;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Build)]
pub struct AuthServiceImpl<Jwt> {
    jwt: Jwt,
    config: AuthServiceConfig,
}

#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    pub access_token_ttl: Duration,
}

impl<Jwt> AuthService for AuthServiceImpl<Jwt>
where
    Jwt: JwtService,
{
    #[trace_instrument(skip(self))]
    fn authenticate(&self, token: &AccessToken) -> Result<Authentication, AuthenticateError> {
        self.jwt
            .verify::<Token>(token.as_ref())
            .map(Authentication::from)
            .map_err(|_| AuthenticateError::InvalidToken)
    }

    #[trace_instrument(skip(self))]
    fn issue_access_token(
        &self,
        user_id: UserId,
        email: EmailAddress,
    ) -> anyhow::Result<AccessToken> {
        let token = Token {
            uid: user_id,
            email,
        };

        self.jwt
            .sign(token, self.config.access_token_ttl)
            .map(AccessToken)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Token {
    uid: UserId,
    email: EmailAddress,
}

impl From<Token> for Authentication {
    fn from(value: Token) -> Self {
        Self {
            user_id: value.uid,
            email: value.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use archive_demo::user::FOO;
    use archive_shared_contracts::jwt::{MockJwtService, VerifyJwtError};
    use archive_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> AuthServiceConfig {
        AuthServiceConfig {
            access_token_ttl: Duration::from_secs(300),
        }
    }

    fn token() -> Token {
        Token {
            uid: FOO.user_id,
            email: FOO.email.clone(),
        }
    }

    #[test]
    fn authenticate_ok() {
        // Arrange
        let jwt = MockJwtService::new().with_verify("the access token", Ok(token()));

        let sut = AuthServiceImpl {
            jwt,
            config: config(),
        };

        // Act
        let result = sut.authenticate(&"the access token".into());

        // Assert
        assert_eq!(result.unwrap(), *FOO);
    }

    #[test]
    fn authenticate_invalid() {
        // Arrange
        let jwt =
            MockJwtService::new().with_verify("the access token", Err(VerifyJwtError::<Token>::Invalid));

        let sut = AuthServiceImpl {
            jwt,
            config: config(),
        };

        // Act
        let result = sut.authenticate(&"the access token".into());

        // Assert
        assert_matches!(result, Err(AuthenticateError::InvalidToken));
    }

    #[test]
    fn authenticate_expired() {
        // Arrange
        let jwt = MockJwtService::new()
            .with_verify("the access token", Err(VerifyJwtError::Expired(token())));

        let sut = AuthServiceImpl {
            jwt,
            config: config(),
        };

        // Act
        let result = sut.authenticate(&"the access token".into());

        // Assert
        assert_matches!(result, Err(AuthenticateError::InvalidToken));
    }

    #[test]
    fn issue_access_token() {
        // Arrange
        let config = config();

        let jwt = MockJwtService::new().with_sign(
            token(),
            config.access_token_ttl,
            Ok("the access token".into()),
        );

        let sut = AuthServiceImpl { jwt, config };

        // Act
        let result = sut.issue_access_token(FOO.user_id, FOO.email.clone());

        // Assert
        assert_eq!(result.unwrap(), AccessToken::from("the access token"));
    }
}
