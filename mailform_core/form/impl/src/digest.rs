use std::sync::Arc;

use mailform_core_form_contracts::digest::FormDigestService;
use mailform_models::{
    form::{FormDigest, FormSubmission},
    request::RequestContext,
    Sensitive,
};
use mailform_shared_contracts::{
    hash::HashService,
    record::{AttemptLog, Record, RecordService},
};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct FormDigestServiceImpl<Hash, Log> {
    hash: Hash,
    record: Log,
    config: FormDigestServiceConfig,
}

#[derive(Debug, Clone)]
pub struct FormDigestServiceConfig {
    pub salt: Sensitive<Arc<String>>,
}

impl<Hash, Log> FormDigestServiceImpl<Hash, Log> {
    pub fn new(hash: Hash, record: Log, config: FormDigestServiceConfig) -> Self {
        Self {
            hash,
            record,
            config,
        }
    }
}

impl<Hash, Log> FormDigestService for FormDigestServiceImpl<Hash, Log>
where
    Hash: HashService,
    Log: RecordService,
{
    fn compute(&self, submission: &FormSubmission) -> FormDigest {
        let input = digest_input(&self.config.salt, submission);
        FormDigest(self.hash.hex_digest(input.as_bytes()))
    }

    fn verify(
        &self,
        candidate: &FormDigest,
        declared_length: Option<usize>,
        submission: &FormSubmission,
        context: &RequestContext,
    ) -> bool {
        let expected = self.compute(submission);
        let expected_length = submission.body_len();

        let digest_matches = expected == *candidate;
        let length_matches = !matches!(declared_length, Some(len) if len != expected_length);
        if digest_matches && length_matches {
            return true;
        }

        warn!(
            client_ip = %context.client_ip,
            digest_matches,
            length_matches,
            "rejecting confirmed message"
        );

        let record = Record::new("digest_mismatch")
            .field("expected", expected.0)
            .field("received", candidate.as_str())
            .field("expected_length", expected_length)
            .field("declared_length", declared_length)
            .field("name", submission.sender_name.as_str())
            .field("email", submission.sender_email.as_str())
            .field("subject", submission.subject.as_str())
            .field("ip", context.client_ip.to_string())
            .field("user_agent", context.user_agent.clone())
            .field("script", context.script.as_str());
        if let Err(err) = self.record.record(AttemptLog::DigestFailures, &record) {
            warn!("Failed to record digest mismatch: {err:#}");
        }

        false
    }
}

/// Fields are joined without separators.
fn digest_input(salt: &str, submission: &FormSubmission) -> String {
    let fields: [&str; 5] = [
        salt,
        &submission.sender_name,
        &submission.sender_email,
        &submission.subject,
        &submission.body,
    ];
    fields.concat()
}
