use mailform_core_form_contracts::FormValidationError;
use mailform_models::{email_address::EmailAddress, form::FormSubmission};

/// Checks a submission before a digest is issued for it. The email address
/// is checked first.
pub(crate) fn validate(submission: &FormSubmission) -> Result<(), FormValidationError> {
    if !EmailAddress::is_valid(&submission.sender_email) {
        return Err(FormValidationError::InvalidEmail);
    }

    if submission.body.trim().is_empty() {
        return Err(FormValidationError::EmptyMessage);
    }

    Ok(())
}
