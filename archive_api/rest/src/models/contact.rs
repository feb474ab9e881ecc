use archive_models::contact::ContactSubmission;
use serde::Deserialize;

/// Body of a contact form submission.
///
/// Missing or `null` fields are accepted here and rejected by the
/// validation of [`ContactSubmission`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    /// Email address of the sender
    pub email: Option<String>,
    pub sender_name: Option<String>,
    pub relationship: Option<String>,
    pub related: Option<String>,
    pub message: Option<String>,
    /// Page the contact form was opened from
    pub page: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            sender_email: value.email.unwrap_or_default(),
            sender_name: value.sender_name.unwrap_or_default(),
            relationship: value.relationship.unwrap_or_default(),
            related: value.related.unwrap_or_default(),
            message: value.message.unwrap_or_default(),
            page: value.page,
        }
    }
}
