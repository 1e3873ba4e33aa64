use std::future::Future;

use mailform_email_contracts::TransportError;
use mailform_models::{form::FormSubmission, request::RequestContext};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormDispatchService: Send + Sync + 'static {
    /// Sanitizes the verified submission, sends it to the configured recipient
    /// and records the attempt.
    fn dispatch(
        &self,
        submission: FormSubmission,
        context: RequestContext,
    ) -> impl Future<Output = Result<(), FormDispatchError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormDispatchError {
    #[error("The mail transport did not accept the message.")]
    Rejected,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FormDispatchError {
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Self::Rejected => None,
            Self::Transport(err) => Some(err),
        }
    }
}

#[cfg(feature = "mock")]
impl MockFormDispatchService {
    pub fn with_dispatch(
        mut self,
        submission: FormSubmission,
        context: RequestContext,
        result: Result<(), FormDispatchError>,
    ) -> Self {
        self.expect_dispatch()
            .once()
            .with(
                mockall::predicate::eq(submission),
                mockall::predicate::eq(context),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
