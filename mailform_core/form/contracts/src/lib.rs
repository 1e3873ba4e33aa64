use std::future::Future;

use mailform_email_contracts::TransportError;
use mailform_models::{
    form::{FormDigest, FormFields, FormSubmission},
    request::RequestContext,
};
use thiserror::Error;

pub mod digest;
pub mod dispatch;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormFeatureService: Send + Sync + 'static {
    /// Runs one step of the contact form protocol for the given request.
    fn process(
        &self,
        fields: FormFields,
        context: RequestContext,
    ) -> impl Future<Output = FormResponse> + Send;
}

/// The step of the protocol a request belongs to, derived from its fields
/// alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStep {
    /// Nothing was submitted yet
    Empty,
    /// A message was submitted and should be previewed
    Preview(FormSubmission),
    /// A previewed message was confirmed
    Confirm {
        submission: FormSubmission,
        digest: FormDigest,
        declared_length: Option<usize>,
    },
}

impl FormStep {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Preview(_) => "preview",
            Self::Confirm { .. } => "confirm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResponse {
    /// Render the blank input form.
    Form,
    /// Render the confirmation preview.
    Preview(FormPreview),
    /// Render a notification.
    Notification(FormNotification),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPreview {
    pub submission: FormSubmission,
    pub digest: FormDigest,
    /// Byte length of the body at preview time
    pub content_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNotification {
    InvalidEmail,
    EmptyMessage,
    /// The confirmed message does not match its digest.
    DigestMismatch,
    /// The message could not be dispatched. `detail` is only set in debug
    /// mode.
    SubmissionFailed { detail: Option<TransportError> },
    SubmissionSucceeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormValidationError {
    #[error("The email address is invalid.")]
    InvalidEmail,
    #[error("The message is empty.")]
    EmptyMessage,
}

impl From<FormValidationError> for FormNotification {
    fn from(value: FormValidationError) -> Self {
        match value {
            FormValidationError::InvalidEmail => Self::InvalidEmail,
            FormValidationError::EmptyMessage => Self::EmptyMessage,
        }
    }
}

#[cfg(feature = "mock")]
impl MockFormFeatureService {
    pub fn with_process(
        mut self,
        fields: FormFields,
        context: RequestContext,
        result: FormResponse,
    ) -> Self {
        self.expect_process()
            .once()
            .with(
                mockall::predicate::eq(fields),
                mockall::predicate::eq(context),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
