//! Classification of form requests into protocol steps.
//!
//! The step is derived from which fields are present in the request and
//! nothing else. A digest always means [`FormStep::Confirm`], so a confirmed
//! message can never be mistaken for a new preview.

use mailform_core_form_contracts::FormStep;
use mailform_models::form::{FormDigest, FormFields, FormSubmission, SubmissionDefaults};

pub fn classify(fields: &FormFields, defaults: &SubmissionDefaults) -> FormStep {
    if let Some(digest) = &fields.digest {
        return FormStep::Confirm {
            submission: FormSubmission::from_fields(fields, defaults),
            digest: FormDigest(digest.clone()),
            declared_length: fields.declared_length(),
        };
    }

    if fields.has_content() {
        FormStep::Preview(FormSubmission::from_fields(fields, defaults))
    } else {
        FormStep::Empty
    }
}
