use std::sync::Arc;

use mailform_core_form_contracts::dispatch::{FormDispatchError, FormDispatchService};
use mailform_email_contracts::{Email, EmailHeader, EmailService, Mailbox};
use mailform_models::{form::FormSubmission, request::RequestContext};
use mailform_shared_contracts::record::{AttemptLog, Record, RecordService};
use mailform_utils::{mailform_version, text::truncate_bytes};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct FormDispatchServiceImpl<Mail, Log> {
    email: Mail,
    record: Log,
    config: FormDispatchServiceConfig,
}

#[derive(Debug, Clone)]
pub struct FormDispatchServiceConfig {
    /// Full address or bare local part of the recipient
    pub recipient: Arc<String>,
    pub subject_prefix: Arc<String>,
    pub max_message_bytes: usize,
    /// Host name of this server, qualifies bare recipients
    pub server_name: Arc<String>,
}

impl<Mail, Log> FormDispatchServiceImpl<Mail, Log> {
    pub fn new(email: Mail, record: Log, config: FormDispatchServiceConfig) -> Self {
        Self {
            email,
            record,
            config,
        }
    }
}

impl<Mail, Log> FormDispatchService for FormDispatchServiceImpl<Mail, Log>
where
    Mail: EmailService,
    Log: RecordService,
{
    async fn dispatch(
        &self,
        submission: FormSubmission,
        context: RequestContext,
    ) -> Result<(), FormDispatchError> {
        let server_name = &*self.config.server_name;
        let name = sanitize_display_name(&submission.sender_name);
        let address = strip_header_breaks(&submission.sender_email);
        let subject = strip_header_breaks(&submission.subject);
        let size = submission.body_len();
        let body = truncate_bytes(&submission.body, self.config.max_message_bytes).to_owned();
        let recipient = resolve_destination(&self.config.recipient, server_name);

        let email = Email {
            recipient: recipient.clone(),
            subject: prefixed_subject(&self.config.subject_prefix, &subject),
            body,
            reply_to: Some(Mailbox {
                name: name.clone(),
                address: address.clone(),
            }),
            headers: vec![
                EmailHeader::new("X-Mailer", format!("mailform/{}", mailform_version())),
                EmailHeader::new("X-Server", strip_header_breaks(server_name)),
                EmailHeader::new("X-Server-Address", context.server_ip.to_string()),
                EmailHeader::new("X-Submitter-IP", context.client_ip.to_string()),
                EmailHeader::new(
                    "X-User-Agent",
                    strip_header_breaks(context.user_agent.as_deref().unwrap_or_default()),
                ),
                EmailHeader::new("X-Script-Name", strip_header_breaks(&context.script)),
            ],
        };

        let result = match self.email.send(email).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(FormDispatchError::Rejected),
            Err(err) => Err(err.into()),
        };

        match &result {
            Ok(()) => info!(%recipient, size, "dispatched message"),
            Err(err) => warn!(%recipient, size, "failed to dispatch message: {err}"),
        }

        let record = Record::new(if result.is_ok() {
            "message_sent"
        } else {
            "message_not_sent"
        })
        .field("to", recipient)
        .field("name", name)
        .field("email", address)
        .field("subject", subject)
        .field("size", size)
        .field("succeeded", result.is_ok())
        .field("error", result.as_ref().err().map(ToString::to_string))
        .field("ip", context.client_ip.to_string())
        .field("script", context.script);
        if let Err(err) = self.record.record(AttemptLog::Messages, &record) {
            warn!("Failed to record message attempt: {err:#}");
        }

        result
    }
}

/// Returns `recipient` if it is a full address, otherwise qualifies the local
/// part with the server name.
pub fn resolve_destination(recipient: &str, server_name: &str) -> String {
    if recipient.contains('@') {
        recipient.into()
    } else {
        format!("{recipient}@{server_name}")
    }
}

pub fn prefixed_subject(prefix: &str, subject: &str) -> String {
    format!("{prefix}: {subject}")
}

/// Removes characters that could start a new header line.
pub fn strip_header_breaks(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '\t'))
        .collect()
}

/// Makes a visitor supplied name safe to use as a mailbox display name.
pub fn sanitize_display_name(name: &str) -> String {
    strip_header_breaks(name)
        .chars()
        .map(|c| match c {
            '"' => '\'',
            '<' => '(',
            '>' => ')',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use mailform_demo::{CONTEXT, FOO, SERVER_NAME};
    use mailform_email_contracts::{MockEmailService, TransportError};
    use mailform_shared_contracts::record::{MockRecordService, RecordValue};
    use mailform_utils::Apply;
    use pretty_assertions::assert_eq;

    use super::*;

    type Sut = FormDispatchServiceImpl<MockEmailService, MockRecordService>;

    fn make_sut(email: MockEmailService, record: MockRecordService) -> Sut {
        FormDispatchServiceImpl::new(
            email,
            record,
            FormDispatchServiceConfig {
                recipient: Arc::new("webmaster".into()),
                subject_prefix: Arc::new("web form".into()),
                max_message_bytes: 10240,
                server_name: Arc::new(SERVER_NAME.into()),
            },
        )
    }

    fn foo_email() -> Email {
        Email {
            recipient: "webmaster@example.com".into(),
            subject: "web form: some subject".into(),
            body: "some message".into(),
            reply_to: Some(Mailbox {
                name: "Joe Bob".into(),
                address: "user@example.com".into(),
            }),
            headers: vec![
                EmailHeader::new("X-Mailer", format!("mailform/{}", mailform_version())),
                EmailHeader::new("X-Server", "example.com"),
                EmailHeader::new("X-Server-Address", "192.0.2.1"),
                EmailHeader::new("X-Submitter-IP", "203.0.113.7"),
                EmailHeader::new("X-User-Agent", CONTEXT.user_agent.clone().unwrap()),
                EmailHeader::new("X-Script-Name", "/"),
            ],
        }
    }

    fn foo_record(event: &'static str, error: Option<&str>) -> Record {
        Record::new(event)
            .field("to", "webmaster@example.com")
            .field("name", "Joe Bob")
            .field("email", "user@example.com")
            .field("subject", "some subject")
            .field("size", 12usize)
            .field("succeeded", error.is_none())
            .field("error", error)
            .field("ip", "203.0.113.7")
            .field("script", "/")
    }

    fn transport_error() -> TransportError {
        TransportError {
            message: "Connection refused".into(),
            location: "smtp://127.0.0.1:25".into(),
        }
    }

    #[test]
    fn resolve() {
        for (recipient, server_name, expected) in [
            ("webmaster", "example.com", "webmaster@example.com"),
            ("webhamster", "example.net", "webhamster@example.net"),
            ("user@example.com", "example.net", "user@example.com"),
        ] {
            assert_eq!(resolve_destination(recipient, server_name), expected);
        }
    }

    #[test]
    fn prefix() {
        assert_eq!(
            prefixed_subject("web form", "a subject"),
            "web form: a subject"
        );
        assert_eq!(
            prefixed_subject("prefix 1", "a subject"),
            "prefix 1: a subject"
        );
    }

    #[test]
    fn sanitize_name() {
        for input in [
            "Joe \"Bob\" <bob@example.com>",
            "Eve\r\nBcc: victim@example.com",
            "\t<<\"\n\">>\r",
        ] {
            let result = sanitize_display_name(input);
            assert!(
                !result.contains(['\r', '\n', '\t', '"', '<', '>']),
                "{result:?}"
            );
        }
        assert_eq!(
            sanitize_display_name("Joe \"Bob\" <bob@example.com>"),
            "Joe 'Bob' (bob@example.com)"
        );
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let email = MockEmailService::new().with_send(foo_email(), true);
        let record = MockRecordService::new()
            .with_record(AttemptLog::Messages, foo_record("message_sent", None));
        let sut = make_sut(email, record);

        // Act
        let result = sut.dispatch(FOO.clone(), CONTEXT.clone()).await;

        // Assert
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let email = MockEmailService::new().with_send(foo_email(), false);
        let record = MockRecordService::new().with_record(
            AttemptLog::Messages,
            foo_record(
                "message_not_sent",
                Some("The mail transport did not accept the message."),
            ),
        );
        let sut = make_sut(email, record);

        // Act
        let result = sut.dispatch(FOO.clone(), CONTEXT.clone()).await;

        // Assert
        assert_eq!(result, Err(FormDispatchError::Rejected));
    }

    #[tokio::test]
    async fn transport_failure() {
        // Arrange
        let email = MockEmailService::new().with_send_error(foo_email(), transport_error());
        let record = MockRecordService::new().with_record(
            AttemptLog::Messages,
            foo_record(
                "message_not_sent",
                Some("Connection refused (at smtp://127.0.0.1:25)"),
            ),
        );
        let sut = make_sut(email, record);

        // Act
        let result = sut.dispatch(FOO.clone(), CONTEXT.clone()).await;

        // Assert
        assert_eq!(result, Err(FormDispatchError::Transport(transport_error())));
    }

    #[tokio::test]
    async fn record_error_is_ignored() {
        // Arrange
        let email = MockEmailService::new().with_send(foo_email(), true);
        let record = MockRecordService::new()
            .with_record_error(AttemptLog::Messages, foo_record("message_sent", None));
        let sut = make_sut(email, record);

        // Act
        let result = sut.dispatch(FOO.clone(), CONTEXT.clone()).await;

        // Assert
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn header_injection() {
        // Arrange
        let submission = FOO.clone().with(|s| {
            s.sender_name = "Eve\r\nBcc: victim@example.com".into();
            s.sender_email = "eve@example.com\nBcc: victim@example.com".into();
            s.subject = "Hi\r\nBcc: victim@example.com".into();
        });
        let context = CONTEXT
            .clone()
            .with(|c| c.user_agent = Some("curl\r\nX-Evil: 1".into()));

        let mut email = MockEmailService::new();
        email
            .expect_send()
            .once()
            .withf(|email| {
                let reply_to = email.reply_to.as_ref().unwrap();
                reply_to.name == "EveBcc: victim@example.com"
                    && reply_to.address == "eve@example.comBcc: victim@example.com"
                    && email.subject == "web form: HiBcc: victim@example.com"
                    && email
                        .headers
                        .iter()
                        .all(|h| !h.value.contains(['\r', '\n', '\t']))
            })
            .return_once(|_| Box::pin(std::future::ready(Ok(true))));
        let mut record = MockRecordService::new();
        record.expect_record().once().return_once(|_, _| Ok(()));
        let sut = make_sut(email, record);

        // Act
        let result = sut.dispatch(submission, context).await;

        // Assert
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn server_address_from_connection() {
        // Arrange
        let context = CONTEXT
            .clone()
            .with(|c| c.server_ip = "2001:db8::1".parse().unwrap());

        let mut email = MockEmailService::new();
        email
            .expect_send()
            .once()
            .withf(|email| {
                email
                    .headers
                    .contains(&EmailHeader::new("X-Server-Address", "2001:db8::1"))
            })
            .return_once(|_| Box::pin(std::future::ready(Ok(true))));
        let mut record = MockRecordService::new();
        record.expect_record().once().return_once(|_, _| Ok(()));
        let sut = make_sut(email, record);

        // Act
        let result = sut.dispatch(FOO.clone(), context).await;

        // Assert
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn truncates_body() {
        // Arrange
        let submission = FOO.clone().with(|s| s.body = "äöü äöü äöü".into());
        let sut = {
            let mut email = MockEmailService::new();
            email
                .expect_send()
                .once()
                .withf(|email| email.body == "äöü ä")
                .return_once(|_| Box::pin(std::future::ready(Ok(true))));
            let mut record = MockRecordService::new();
            record
                .expect_record()
                .once()
                .withf(|_, record| record.fields.get("size") == Some(&RecordValue::Int(20)))
                .return_once(|_, _| Ok(()));
            make_sut(email, record).with(|sut| sut.config.max_message_bytes = 10)
        };

        // Act
        let result = sut.dispatch(submission, CONTEXT.clone()).await;

        // Assert
        assert_eq!(result, Ok(()));
    }
}
