use archive_models::{
    auth::{AccessToken, AuthenticateError},
    email_address::EmailAddress,
    user::UserId,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait AuthService: Send + Sync + 'static {
    /// Authenticates a user using an access token.
    fn authenticate(&self, token: &AccessToken) -> Result<Authentication, AuthenticateError>;

    /// Issues an access token for the given user.
    fn issue_access_token(
        &self,
        user_id: UserId,
        email: EmailAddress,
    ) -> anyhow::Result<AccessToken>;
}

/// The principal an access token was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    pub user_id: UserId,
    pub email: EmailAddress,
}

#[cfg(feature = "mock")]
impl MockAuthService {
    pub fn with_authenticate(mut self, token: AccessToken, auth: Option<Authentication>) -> Self {
        self.expect_authenticate()
            .once()
            .with(mockall::predicate::eq(token))
            .return_once(|_| auth.ok_or(AuthenticateError::InvalidToken));
        self
    }

    pub fn with_issue_access_token(
        mut self,
        user_id: UserId,
        email: EmailAddress,
        result: AccessToken,
    ) -> Self {
        self.expect_issue_access_token()
            .once()
            .with(
                mockall::predicate::eq(user_id),
                mockall::predicate::eq(email),
            )
            .return_once(|_, _| Ok(result));
        self
    }
}
