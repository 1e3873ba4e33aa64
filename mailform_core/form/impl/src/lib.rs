use std::sync::Arc;

use mailform_core_form_contracts::{
    digest::FormDigestService, dispatch::FormDispatchService, FormFeatureService,
    FormNotification, FormPreview, FormResponse, FormStep,
};
use mailform_models::{
    form::{FormDigest, FormFields, FormSubmission, SubmissionDefaults},
    request::RequestContext,
};
use mailform_shared_contracts::dump::DumpService;
use tracing::{debug, warn};

pub mod digest;
pub mod dispatch;
pub mod step;
mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct FormFeatureServiceImpl<Digest, Dispatch, Dump> {
    digest: Digest,
    dispatch: Dispatch,
    dump: Dump,
    config: FormFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct FormFeatureConfig {
    pub defaults: Arc<SubmissionDefaults>,
    /// Include transport error details in failure notifications.
    pub debug: bool,
}

impl<Digest, Dispatch, Dump> FormFeatureServiceImpl<Digest, Dispatch, Dump> {
    pub fn new(digest: Digest, dispatch: Dispatch, dump: Dump, config: FormFeatureConfig) -> Self {
        Self {
            digest,
            dispatch,
            dump,
            config,
        }
    }
}

impl<Digest, Dispatch, Dump> FormFeatureService for FormFeatureServiceImpl<Digest, Dispatch, Dump>
where
    Digest: FormDigestService,
    Dispatch: FormDispatchService,
    Dump: DumpService,
{
    async fn process(&self, fields: FormFields, context: RequestContext) -> FormResponse {
        let step = step::classify(&fields, &self.config.defaults);
        debug!(step = step.name(), client_ip = %context.client_ip, "processing form request");
        self.capture(&step, &fields, &context);

        match step {
            FormStep::Empty => FormResponse::Form,
            FormStep::Preview(submission) => self.preview(submission),
            FormStep::Confirm {
                submission,
                digest,
                declared_length,
            } => {
                self.confirm(submission, digest, declared_length, context)
                    .await
            }
        }
    }
}

impl<Digest, Dispatch, Dump> FormFeatureServiceImpl<Digest, Dispatch, Dump>
where
    Digest: FormDigestService,
    Dispatch: FormDispatchService,
    Dump: DumpService,
{
    fn preview(&self, submission: FormSubmission) -> FormResponse {
        if let Err(err) = validate::validate(&submission) {
            debug!("rejecting submission: {err}");
            return FormResponse::Notification(err.into());
        }

        let digest = self.digest.compute(&submission);
        FormResponse::Preview(FormPreview {
            content_length: submission.body_len(),
            digest,
            submission,
        })
    }

    async fn confirm(
        &self,
        submission: FormSubmission,
        digest: FormDigest,
        declared_length: Option<usize>,
        context: RequestContext,
    ) -> FormResponse {
        if !self
            .digest
            .verify(&digest, declared_length, &submission, &context)
        {
            return FormResponse::Notification(FormNotification::DigestMismatch);
        }

        let notification = match self.dispatch.dispatch(submission, context).await {
            Ok(()) => FormNotification::SubmissionSucceeded,
            Err(err) => FormNotification::SubmissionFailed {
                detail: self
                    .config
                    .debug
                    .then(|| err.transport_error().cloned())
                    .flatten(),
            },
        };
        FormResponse::Notification(notification)
    }

    fn capture(&self, step: &FormStep, fields: &FormFields, context: &RequestContext) {
        let text = format!(
            "step: {}\nclient_ip: {}\nuser_agent: {}\nscript: {}\nfields: {fields:#?}",
            step.name(),
            context.client_ip,
            context.user_agent.as_deref().unwrap_or("-"),
            context.script,
        );
        if let Err(err) = self.dump.capture(&text) {
            warn!("Failed to capture request dump: {err:#}");
        }
    }
}
