use std::sync::LazyLock;

use archive_models::{
    contact::{ContactRequestMetadata, ContactSubmission},
    email_address::EmailAddress,
};

pub static RECIPIENT: LazyLock<EmailAddress> =
    LazyLock::new(|| "support@example.org".parse().unwrap());

pub static SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    sender_email: "a@b.com".into(),
    sender_name: "A B".into(),
    relationship: "author".into(),
    related: "item-123".into(),
    message: "Please help".into(),
    page: Some("/browse".into()),
});

pub static METADATA: LazyLock<ContactRequestMetadata> =
    LazyLock::new(|| ContactRequestMetadata {
        correlation_id: Some("abc".into()),
        user_agent: Some("test-agent".into()),
        locale: None,
    });
