use mailform_core_form_contracts::{
    digest::MockFormDigestService, dispatch::MockFormDispatchService, FormFeatureService,
    FormNotification, FormPreview, FormResponse,
};
use mailform_demo::{CONTEXT, DEFAULTS, FOO, FOO_DIGEST, FOO_FIELDS};
use mailform_models::form::{FormFields, FormSubmission};
use mailform_utils::Apply;
use pretty_assertions::assert_eq;

use crate::tests::make_sut;

#[tokio::test]
async fn ok() {
    // Arrange
    let digest = MockFormDigestService::new().with_compute(FOO.clone(), FOO_DIGEST.clone());
    let sut = make_sut(digest, MockFormDispatchService::new());

    // Act
    let result = sut.process(FOO_FIELDS.clone(), CONTEXT.clone()).await;

    // Assert
    assert_eq!(
        result,
        FormResponse::Preview(FormPreview {
            submission: FOO.clone(),
            digest: FOO_DIGEST.clone(),
            content_length: 12,
        })
    );
}

#[tokio::test]
async fn defaults() {
    // Arrange
    let fields = FormFields {
        email: Some("user@example.com".into()),
        message: Some("Hello\nworld".into()),
        ..Default::default()
    };
    let expected = FormSubmission {
        sender_name: DEFAULTS.sender_name.clone(),
        sender_email: "user@example.com".into(),
        subject: DEFAULTS.subject.clone(),
        body: "Hello\r\nworld".into(),
    };
    let digest = MockFormDigestService::new().with_compute(expected.clone(), FOO_DIGEST.clone());
    let sut = make_sut(digest, MockFormDispatchService::new());

    // Act
    let result = sut.process(fields, CONTEXT.clone()).await;

    // Assert
    assert_eq!(
        result,
        FormResponse::Preview(FormPreview {
            submission: expected,
            digest: FOO_DIGEST.clone(),
            content_length: 12,
        })
    );
}

#[tokio::test]
async fn invalid_email() {
    // Arrange
    let fields = FOO_FIELDS
        .clone()
        .with(|f| f.email = Some("This is not a valid email".into()));
    let sut = make_sut(MockFormDigestService::new(), MockFormDispatchService::new());

    // Act
    let result = sut.process(fields, CONTEXT.clone()).await;

    // Assert
    assert_eq!(
        result,
        FormResponse::Notification(FormNotification::InvalidEmail)
    );
}

#[tokio::test]
async fn empty_message() {
    // Arrange
    let fields = FOO_FIELDS.clone().with(|f| f.message = Some(" \r\n ".into()));
    let sut = make_sut(MockFormDigestService::new(), MockFormDispatchService::new());

    // Act
    let result = sut.process(fields, CONTEXT.clone()).await;

    // Assert
    assert_eq!(
        result,
        FormResponse::Notification(FormNotification::EmptyMessage)
    );
}

#[tokio::test]
async fn invalid_email_before_empty_message() {
    // Arrange
    let fields = FormFields {
        from: Some("John Smith".into()),
        ..Default::default()
    };
    let sut = make_sut(MockFormDigestService::new(), MockFormDispatchService::new());

    // Act
    let result = sut.process(fields, CONTEXT.clone()).await;

    // Assert
    assert_eq!(
        result,
        FormResponse::Notification(FormNotification::InvalidEmail)
    );
}
