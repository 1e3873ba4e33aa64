use std::{
    net::{IpAddr, Ipv4Addr},
    sync::LazyLock,
};

use mailform_models::{
    form::{FormDigest, FormFields, FormSubmission, SubmissionDefaults},
    request::RequestContext,
};

pub const SALT: &str = "some salt";

/// SHA-256 digest of [`FOO`] with [`SALT`]
pub const FOO_DIGEST_HEX: &str =
    "a73c72da0bbb7919e8041bbf68bcadbbabe491909497b796ecc83604cf7eee59";

/// MD5 digest of [`BAR`] with `"sample salt"`
pub const BAR_MD5_DIGEST_HEX: &str = "f3f15ffd0c0eb266eda6076d9e7b3d1f";

/// Name of the host serving the form
pub const SERVER_NAME: &str = "example.com";

pub static DEFAULTS: LazyLock<SubmissionDefaults> = LazyLock::new(|| SubmissionDefaults {
    sender_name: "Anonymous".into(),
    subject: "Comment".into(),
});

pub static FOO: LazyLock<FormSubmission> = LazyLock::new(|| FormSubmission {
    sender_name: "Joe Bob".into(),
    sender_email: "user@example.com".into(),
    subject: "some subject".into(),
    body: "some message".into(),
});

pub static BAR: LazyLock<FormSubmission> = LazyLock::new(|| FormSubmission {
    sender_name: "Joe Bob".into(),
    sender_email: "user@example.com".into(),
    subject: "Hello world".into(),
    body: "This is a message.".into(),
});

pub static FOO_DIGEST: LazyLock<FormDigest> = LazyLock::new(|| FOO_DIGEST_HEX.to_owned().into());

/// Fields of the preview request for [`FOO`]
pub static FOO_FIELDS: LazyLock<FormFields> = LazyLock::new(|| FormFields {
    from: Some(FOO.sender_name.clone()),
    email: Some(FOO.sender_email.clone()),
    subject: Some(FOO.subject.clone()),
    message: Some(FOO.body.clone()),
    digest: None,
    content_length: None,
});

/// Fields of the confirm request for [`FOO`]
pub static FOO_CONFIRM_FIELDS: LazyLock<FormFields> = LazyLock::new(|| FormFields {
    digest: Some(FOO_DIGEST_HEX.into()),
    content_length: Some(FOO.body_len().to_string()),
    ..FOO_FIELDS.clone()
});

pub static CONTEXT: LazyLock<RequestContext> = LazyLock::new(|| RequestContext {
    client_ip: IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)),
    server_ip: IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)),
    user_agent: Some(
        "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0".into(),
    ),
    script: "/".into(),
});
