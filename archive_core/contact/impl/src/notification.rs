use archive_core_contact_contracts::notification::{
    ContactNotificationService, ContactNotifyError,
};
use archive_di::Build;
use archive_email_contracts::{Email, EmailService};
use archive_models::{
    contact::{ContactRequestMetadata, ContactSubmission},
    email_address::EmailAddress,
};
use archive_shared_contracts::time::TimeService;
use archive_templates_contracts::{ContactusTemplate, TemplateService};
use archive_utils::trace_instrument;
use tracing::info;

const DEFAULT_SUBJECT: &str = "Contact Form";

#[derive(Debug, Clone, Build)]
pub struct ContactNotificationServiceImpl<Time, Template, Email> {
    time: Time,
    template: Template,
    email: Email,
}

impl<Time, Template, EmailS> ContactNotificationService
    for ContactNotificationServiceImpl<Time, Template, EmailS>
where
    Time: TimeService,
    Template: TemplateService,
    EmailS: EmailService,
{
    #[trace_instrument(skip(self))]
    async fn notify(
        &self,
        current_user_email: Option<EmailAddress>,
        recipient: EmailAddress,
        submission: ContactSubmission,
        metadata: ContactRequestMetadata,
    ) -> Result<(), ContactNotifyError> {
        let reply_to = submission.sender_email.trim().parse().ok();

        let template = ContactusTemplate {
            args: [
                Some(self.time.now().to_rfc2822()),
                Some(submission.sender_email),
                Some(submission.sender_name),
                Some(submission.relationship),
                Some(submission.related),
                Some(current_user_email.map(|x| x.to_string()).unwrap_or_default()),
                submission.page,
                metadata.user_agent,
                metadata.correlation_id,
                Some(submission.message),
            ],
        };

        let rendered = self
            .template
            .render(&template, metadata.locale)
            .map_err(ContactNotifyError::Template)?;
        let (subject, body) = split_subject(&rendered);

        let email = Email {
            recipient: recipient.clone(),
            subject,
            body,
            reply_to,
        };

        if !self
            .email
            .send(email)
            .await
            .map_err(ContactNotifyError::Transport)?
        {
            return Err(ContactNotifyError::Rejected);
        }

        info!(%recipient, "Sent contact email");

        Ok(())
    }
}

/// Split a leading `Subject: ...` line off the rendered template.
fn split_subject(rendered: &str) -> (String, String) {
    let rendered = rendered.trim_start();
    match rendered.strip_prefix("Subject:") {
        Some(rest) => {
            let (subject, body) = rest.split_once('\n').unwrap_or((rest, ""));
            (
                subject.trim().into(),
                body.trim_start_matches(['\r', '\n']).into(),
            )
        }
        None => (DEFAULT_SUBJECT.into(), rendered.into()),
    }
}
