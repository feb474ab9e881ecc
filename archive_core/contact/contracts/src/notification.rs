use std::future::Future;

use archive_models::{
    contact::{ContactRequestMetadata, ContactSubmission},
    email_address::EmailAddress,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactNotificationService: Send + Sync + 'static {
    /// Render the contact form email and send it to `recipient`.
    fn notify(
        &self,
        current_user_email: Option<EmailAddress>,
        recipient: EmailAddress,
        submission: ContactSubmission,
        metadata: ContactRequestMetadata,
    ) -> impl Future<Output = Result<(), ContactNotifyError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactNotifyError {
    #[error("Failed to render the contact email: {0:#}")]
    Template(anyhow::Error),
    #[error("The smtp server rejected the contact email.")]
    Rejected,
    #[error("Failed to send the contact email: {0:#}")]
    Transport(anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactNotificationService {
    pub fn with_notify(
        mut self,
        current_user_email: Option<EmailAddress>,
        recipient: EmailAddress,
        submission: ContactSubmission,
        metadata: ContactRequestMetadata,
        result: Result<(), ContactNotifyError>,
    ) -> Self {
        self.expect_notify()
            .once()
            .with(
                mockall::predicate::eq(current_user_email),
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(submission),
                mockall::predicate::eq(metadata),
            )
            .return_once(|_, _, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
