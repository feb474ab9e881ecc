use archive_utils::non_blank;

use crate::locale::Locale;

/// A message submitted through the contact form.
///
/// Values are kept exactly as they were submitted. Use
/// [`has_required_fields`](Self::has_required_fields) to check whether the
/// submission is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub sender_email: String,
    pub sender_name: String,
    /// How the sender relates to the repository, e.g. `author`.
    pub relationship: String,
    /// The item or collection the message is about.
    pub related: String,
    pub message: String,
    /// The page the contact form was opened from.
    pub page: Option<String>,
}

impl ContactSubmission {
    /// Return whether all required fields contain at least one
    /// non-whitespace character.
    pub fn has_required_fields(&self) -> bool {
        [
            &self.sender_email,
            &self.sender_name,
            &self.relationship,
            &self.related,
            &self.message,
        ]
        .into_iter()
        .all(|field| non_blank(Some(field.as_str())).is_some())
    }
}

/// Information about the http request a submission was received with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequestMetadata {
    /// Value of the `x-correlation-id` header.
    pub correlation_id: Option<String>,
    pub user_agent: Option<String>,
    pub locale: Option<Locale>,
}
