//! Rendering of form responses into complete HTML pages.

use mailform_core_form_contracts::{FormNotification, FormResponse};
use mailform_templates_contracts::{
    FormTemplate, NotificationStatus, NotificationTemplate, PageTemplate, PreviewTemplate,
    Strings, TemplateService,
};

use crate::PageConfig;

pub fn render(
    templates: &impl TemplateService,
    config: &PageConfig,
    response: &FormResponse,
    action: String,
) -> anyhow::Result<String> {
    let strings = Strings::of(config.language);

    let content = match response {
        FormResponse::Form => templates.render(&FormTemplate {
            strings,
            action,
            greeting: config.greeting.clone(),
            show_placeholders: config.show_placeholders,
            textarea_rows: config.textarea_rows,
        })?,
        FormResponse::Preview(preview) => templates.render(&PreviewTemplate {
            strings,
            action,
            from: preview.submission.sender_name.clone(),
            email: preview.submission.sender_email.clone(),
            subject: preview.submission.subject.clone(),
            message: preview.submission.body.clone(),
            digest: preview.digest.to_string(),
            content_length: preview.content_length,
        })?,
        FormResponse::Notification(notification) => {
            templates.render(&notification_template(strings, notification))?
        }
    };

    templates.render(&PageTemplate {
        lang: config.language.code(),
        title: strings.title,
        content,
    })
}

pub fn notification_template(
    strings: &'static Strings,
    notification: &FormNotification,
) -> NotificationTemplate {
    let (status, message) = match notification {
        FormNotification::InvalidEmail => (NotificationStatus::Failure, strings.invalid_email),
        FormNotification::EmptyMessage => (NotificationStatus::Failure, strings.empty_message),
        FormNotification::DigestMismatch => {
            (NotificationStatus::Failure, strings.checksum_failure)
        }
        FormNotification::SubmissionFailed { .. } => {
            (NotificationStatus::Failure, strings.submission_failure)
        }
        FormNotification::SubmissionSucceeded => {
            (NotificationStatus::Success, strings.submission_success)
        }
    };

    let detail = match notification {
        FormNotification::SubmissionFailed {
            detail: Some(err),
        } => Some(err.to_string()),
        _ => None,
    };

    NotificationTemplate {
        status,
        message,
        detail,
    }
}
