use mailform_utils::text::normalize_newlines;
use serde::{Deserialize, Serialize};

/// Raw form fields of a single request, exactly as they were submitted.
///
/// A field that was not submitted at all is `None`, which is different from a
/// field that was submitted empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// `mail_from`
    pub from: Option<String>,
    /// `mail_email`
    pub email: Option<String>,
    /// `mail_subject`
    pub subject: Option<String>,
    /// `mail_message`
    pub message: Option<String>,
    /// `mail_digest`
    pub digest: Option<String>,
    /// `mail_content_length`
    pub content_length: Option<String>,
}

impl FormFields {
    pub fn has_content(&self) -> bool {
        [&self.from, &self.email, &self.subject, &self.message]
            .into_iter()
            .any(Option::is_some)
    }

    /// Parses the body length recorded at preview time.
    pub fn declared_length(&self) -> Option<usize> {
        self.content_length.as_deref()?.trim().parse().ok()
    }
}

/// Values used for optional fields the visitor left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDefaults {
    pub sender_name: String,
    pub subject: String,
}

/// A message as reconstructed from the form fields of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub body: String,
}

impl FormSubmission {
    pub fn from_fields(fields: &FormFields, defaults: &SubmissionDefaults) -> Self {
        Self {
            sender_name: field_value(fields.from.as_deref(), Some(&defaults.sender_name)),
            sender_email: field_value(fields.email.as_deref(), None),
            subject: field_value(fields.subject.as_deref(), Some(&defaults.subject)),
            body: normalize_newlines(&field_value(fields.message.as_deref(), None)),
        }
    }

    /// Length of the body in bytes.
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}

fn field_value(value: Option<&str>, default: Option<&str>) -> String {
    match (value.map(str::trim), default) {
        (Some(value), _) if !value.is_empty() => value.into(),
        (_, Some(default)) => default.into(),
        (Some(value), None) => value.into(),
        (None, None) => String::new(),
    }
}

/// Integrity tag binding the fields of a previewed message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormDigest(pub String);

impl FormDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FormDigest {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for FormDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
