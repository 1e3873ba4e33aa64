use mailform_models::form::FormFields;
use serde::Deserialize;

/// Fields of the contact form as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiFormFields {
    pub mail_from: Option<String>,
    pub mail_email: Option<String>,
    pub mail_subject: Option<String>,
    pub mail_message: Option<String>,
    pub mail_digest: Option<String>,
    pub mail_content_length: Option<String>,
}

impl From<ApiFormFields> for FormFields {
    fn from(value: ApiFormFields) -> Self {
        Self {
            from: value.mail_from,
            email: value.mail_email,
            subject: value.mail_subject,
            message: value.mail_message,
            digest: value.mail_digest,
            content_length: value.mail_content_length,
        }
    }
}
