use std::future::Future;

use archive_models::{
    auth::{AccessToken, AuthenticateError},
    contact::{ContactRequestMetadata, ContactSubmission},
};
use notification::ContactNotifyError;
use thiserror::Error;

pub mod notification;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Return whether a contact recipient is configured.
    fn is_enabled(&self) -> bool;

    /// Validate a contact form submission and forward it to the configured
    /// recipient.
    ///
    /// The access token is optional. If present it must be valid and the
    /// authenticated user's email is included in the notification.
    fn create_contact_request(
        &self,
        token: Option<AccessToken>,
        submission: ContactSubmission,
        metadata: ContactRequestMetadata,
    ) -> impl Future<Output = Result<(), ContactCreateError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactCreateError {
    #[error("No contact recipient is configured.")]
    Disabled,
    #[error("A required field is blank.")]
    MissingFields,
    #[error(transparent)]
    Auth(#[from] AuthenticateError),
    #[error(transparent)]
    Notify(#[from] ContactNotifyError),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_is_enabled(mut self, enabled: bool) -> Self {
        self.expect_is_enabled().once().return_const(enabled);
        self
    }

    pub fn with_create_contact_request(
        mut self,
        token: Option<AccessToken>,
        submission: ContactSubmission,
        metadata: ContactRequestMetadata,
        result: Result<(), ContactCreateError>,
    ) -> Self {
        self.expect_create_contact_request()
            .once()
            .with(
                mockall::predicate::eq(token),
                mockall::predicate::eq(submission),
                mockall::predicate::eq(metadata),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
