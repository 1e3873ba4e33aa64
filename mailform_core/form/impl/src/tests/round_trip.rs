use std::sync::Arc;

use mailform_core_form_contracts::{
    dispatch::MockFormDispatchService, FormFeatureService, FormNotification, FormPreview,
    FormResponse,
};
use mailform_demo::{CONTEXT, FOO, FOO_DIGEST, FOO_FIELDS, SALT};
use mailform_models::{
    form::{FormFields, FormSubmission},
    hash::HashAlgorithm,
    Sensitive,
};
use mailform_shared_contracts::{
    dump::MockDumpService,
    record::{AttemptLog, MockRecordService},
};
use mailform_shared_impl::hash::HashServiceImpl;
use mailform_utils::Apply;
use pretty_assertions::assert_eq;

use crate::{
    digest::{FormDigestServiceConfig, FormDigestServiceImpl},
    tests::config,
    FormFeatureServiceImpl,
};

type Sut = FormFeatureServiceImpl<
    FormDigestServiceImpl<HashServiceImpl, MockRecordService>,
    MockFormDispatchService,
    MockDumpService,
>;

fn make_sut(record: MockRecordService, dispatch: MockFormDispatchService) -> Sut {
    FormFeatureServiceImpl::new(
        FormDigestServiceImpl::new(
            HashServiceImpl::new(HashAlgorithm::Sha256),
            record,
            FormDigestServiceConfig {
                salt: Sensitive(Arc::new(SALT.into())),
            },
        ),
        dispatch,
        MockDumpService::new().ignoring(),
        config(false),
    )
}

/// Builds the fields the browser submits when the preview form is confirmed.
fn confirm_fields(preview: &FormPreview) -> FormFields {
    FormFields {
        from: Some(preview.submission.sender_name.clone()),
        email: Some(preview.submission.sender_email.clone()),
        subject: Some(preview.submission.subject.clone()),
        message: Some(preview.submission.body.clone()),
        digest: Some(preview.digest.to_string()),
        content_length: Some(preview.content_length.to_string()),
    }
}

#[tokio::test]
async fn preview_then_confirm() {
    // Arrange
    let dispatch =
        MockFormDispatchService::new().with_dispatch(FOO.clone(), CONTEXT.clone(), Ok(()));
    let sut = make_sut(MockRecordService::new(), dispatch);

    // Act
    let preview = sut.process(FOO_FIELDS.clone(), CONTEXT.clone()).await;
    let FormResponse::Preview(preview) = preview else {
        panic!("expected a preview, got {preview:?}");
    };
    let result = sut.process(confirm_fields(&preview), CONTEXT.clone()).await;

    // Assert
    assert_eq!(preview.digest, *FOO_DIGEST);
    assert_eq!(
        result,
        FormResponse::Notification(FormNotification::SubmissionSucceeded)
    );
}

#[tokio::test]
async fn line_breaks_survive_round_trip() {
    // Arrange
    let fields = FOO_FIELDS
        .clone()
        .with(|f| f.message = Some("line one\nline two".into()));
    let expected = FormSubmission {
        body: "line one\r\nline two".into(),
        ..FOO.clone()
    };
    let dispatch =
        MockFormDispatchService::new().with_dispatch(expected, CONTEXT.clone(), Ok(()));
    let sut = make_sut(MockRecordService::new(), dispatch);

    // Act
    let preview = sut.process(fields, CONTEXT.clone()).await;
    let FormResponse::Preview(preview) = preview else {
        panic!("expected a preview, got {preview:?}");
    };
    let result = sut.process(confirm_fields(&preview), CONTEXT.clone()).await;

    // Assert
    assert_eq!(preview.content_length, 18);
    assert_eq!(
        result,
        FormResponse::Notification(FormNotification::SubmissionSucceeded)
    );
}

#[tokio::test]
async fn tampered_subject() {
    // Arrange
    let mut record = MockRecordService::new();
    record
        .expect_record()
        .once()
        .withf(|log, record| {
            *log == AttemptLog::DigestFailures
                && record.event == "digest_mismatch"
                && record.fields["subject"].to_string() == "Buy now"
        })
        .return_once(|_, _| Ok(()));
    let sut = make_sut(record, MockFormDispatchService::new());

    // Act
    let preview = sut.process(FOO_FIELDS.clone(), CONTEXT.clone()).await;
    let FormResponse::Preview(preview) = preview else {
        panic!("expected a preview, got {preview:?}");
    };
    let fields = confirm_fields(&preview).with(|f| f.subject = Some("Buy now".into()));
    let result = sut.process(fields, CONTEXT.clone()).await;

    // Assert
    assert_eq!(
        result,
        FormResponse::Notification(FormNotification::DigestMismatch)
    );
}
