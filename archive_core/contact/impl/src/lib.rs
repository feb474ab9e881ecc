use std::sync::Arc;

use archive_auth_contracts::AuthService;
use archive_core_contact_contracts::{
    notification::ContactNotificationService, ContactCreateError, ContactFeatureService,
};
use archive_di::Build;
use archive_models::{
    auth::AccessToken,
    contact::{ContactRequestMetadata, ContactSubmission},
    email_address::EmailAddress,
};
use archive_utils::trace_instrument;
use tracing::warn;

pub mod notification;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Auth, Notification> {
    auth: Auth,
    notification: Notification,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// `None` disables the contact form.
    pub recipient: Option<Arc<EmailAddress>>,
}

impl<Auth, Notification> ContactFeatureService for ContactFeatureServiceImpl<Auth, Notification>
where
    Auth: AuthService,
    Notification: ContactNotificationService,
{
    fn is_enabled(&self) -> bool {
        let enabled = self.config.recipient.is_some();
        if !enabled {
            warn!("Contact recipient is not configured, rejecting contact request");
        }
        enabled
    }

    #[trace_instrument(skip(self))]
    async fn create_contact_request(
        &self,
        token: Option<AccessToken>,
        submission: ContactSubmission,
        metadata: ContactRequestMetadata,
    ) -> Result<(), ContactCreateError> {
        let recipient = self
            .config
            .recipient
            .as_deref()
            .ok_or(ContactCreateError::Disabled)?;

        if !submission.has_required_fields() {
            return Err(ContactCreateError::MissingFields);
        }

        let current_user_email = token
            .map(|token| self.auth.authenticate(&token))
            .transpose()?
            .map(|auth| auth.email);

        self.notification
            .notify(current_user_email, recipient.clone(), submission, metadata)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use archive_auth_contracts::MockAuthService;
    use archive_core_contact_contracts::notification::{
        ContactNotifyError, MockContactNotificationService,
    };
    use archive_demo::{
        contact::{METADATA, RECIPIENT, SUBMISSION},
        user::FOO,
    };
    use archive_models::auth::AuthenticateError;
    use archive_utils::assert_matches;

    use super::*;

    type Sut = ContactFeatureServiceImpl<MockAuthService, MockContactNotificationService>;

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            recipient: Some(RECIPIENT.clone().into()),
        }
    }

    #[test]
    fn is_enabled() {
        let enabled = Sut {
            auth: MockAuthService::new(),
            notification: MockContactNotificationService::new(),
            config: config(),
        };
        let disabled = Sut {
            auth: MockAuthService::new(),
            notification: MockContactNotificationService::new(),
            config: ContactFeatureConfig { recipient: None },
        };

        assert!(enabled.is_enabled());
        assert!(!disabled.is_enabled());
    }

    #[tokio::test]
    async fn ok_anonymous() {
        // Arrange
        let notification = MockContactNotificationService::new().with_notify(
            None,
            RECIPIENT.clone(),
            SUBMISSION.clone(),
            METADATA.clone(),
            Ok(()),
        );

        let sut = Sut {
            auth: MockAuthService::new(),
            notification,
            config: config(),
        };

        // Act
        let result = sut
            .create_contact_request(None, SUBMISSION.clone(), METADATA.clone())
            .await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn ok_authenticated() {
        // Arrange
        let token = AccessToken::from("the access token");

        let auth = MockAuthService::new().with_authenticate(token.clone(), Some(FOO.clone()));

        let notification = MockContactNotificationService::new().with_notify(
            Some(FOO.email.clone()),
            RECIPIENT.clone(),
            SUBMISSION.clone(),
            METADATA.clone(),
            Ok(()),
        );

        let sut = Sut {
            auth,
            notification,
            config: config(),
        };

        // Act
        let result = sut
            .create_contact_request(Some(token), SUBMISSION.clone(), METADATA.clone())
            .await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn disabled() {
        // Arrange
        let sut = Sut {
            auth: MockAuthService::new(),
            notification: MockContactNotificationService::new(),
            config: ContactFeatureConfig { recipient: None },
        };

        // Act
        let result = sut
            .create_contact_request(None, SUBMISSION.clone(), METADATA.clone())
            .await;

        // Assert
        assert_matches!(result, Err(ContactCreateError::Disabled));
    }

    #[tokio::test]
    async fn missing_fields() {
        // Arrange
        let sut = Sut {
            auth: MockAuthService::new(),
            notification: MockContactNotificationService::new(),
            config: config(),
        };

        let submission = ContactSubmission {
            message: "".into(),
            ..SUBMISSION.clone()
        };

        // Act
        let result = sut
            .create_contact_request(
                Some("invalid token".into()),
                submission,
                METADATA.clone(),
            )
            .await;

        // Assert
        assert_matches!(result, Err(ContactCreateError::MissingFields));
    }

    #[tokio::test]
    async fn invalid_token() {
        // Arrange
        let token = AccessToken::from("invalid token");
        let auth = MockAuthService::new().with_authenticate(token.clone(), None);

        let sut = Sut {
            auth,
            notification: MockContactNotificationService::new(),
            config: config(),
        };

        // Act
        let result = sut
            .create_contact_request(Some(token), SUBMISSION.clone(), METADATA.clone())
            .await;

        // Assert
        assert_matches!(
            result,
            Err(ContactCreateError::Auth(AuthenticateError::InvalidToken))
        );
    }

    #[tokio::test]
    async fn notification_rejected() {
        // Arrange
        let notification = MockContactNotificationService::new().with_notify(
            None,
            RECIPIENT.clone(),
            SUBMISSION.clone(),
            METADATA.clone(),
            Err(ContactNotifyError::Rejected),
        );

        let sut = Sut {
            auth: MockAuthService::new(),
            notification,
            config: config(),
        };

        // Act
        let result = sut
            .create_contact_request(None, SUBMISSION.clone(), METADATA.clone())
            .await;

        // Assert
        assert_matches!(
            result,
            Err(ContactCreateError::Notify(ContactNotifyError::Rejected))
        );
    }
}
