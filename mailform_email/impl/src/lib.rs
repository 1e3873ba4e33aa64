use anyhow::anyhow;
use lettre::{
    message::{
        header::{self, HeaderName, HeaderValue},
        MessageBuilder,
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use mailform_email_contracts::{Email, EmailService, Mailbox, TransportError};
use mailform_models::email_address::EmailAddress;
use mailform_utils::Apply;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// SMTP url without credentials, reported as the location of transport errors
    endpoint: String,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddress) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();
        let endpoint = redact_url(url)?;

        Ok(Self {
            from,
            transport,
            endpoint,
        })
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let reply_to = email.reply_to.map(into_mailbox).transpose()?;

        email
            .headers
            .into_iter()
            .fold(
                Message::builder()
                    .from(lettre::message::Mailbox::new(None, self.from.0.clone()))
                    .to(email.recipient.parse()?)
                    .apply_map(reply_to, MessageBuilder::reply_to)
                    .subject(email.subject)
                    .header(header::ContentType::TEXT_PLAIN),
                |builder, h| {
                    let name = HeaderName::new_from_ascii_str(h.name);
                    builder.raw_header(HeaderValue::new(name, h.value))
                },
            )
            .body(email.body)
            .map_err(Into::into)
    }

    fn transport_error(&self, err: impl std::fmt::Display) -> TransportError {
        TransportError {
            message: err.to_string(),
            location: self.endpoint.clone(),
        }
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<bool, TransportError> {
        let message = self
            .build_message(email)
            .map_err(|err| self.transport_error(err))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|err| self.transport_error(err))?;

        debug!(code = %response.code(), "smtp server responded");
        Ok(response.is_positive())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn into_mailbox(mailbox: Mailbox) -> anyhow::Result<lettre::message::Mailbox> {
    Ok(lettre::message::Mailbox::new(
        Some(mailbox.name),
        mailbox.address.parse()?,
    ))
}

fn redact_url(url: &str) -> anyhow::Result<String> {
    let mut url = Url::parse(url)?;
    url.set_username("")
        .and_then(|()| url.set_password(None))
        .map_err(|()| anyhow!("Invalid smtp url"))?;
    Ok(url.into())
}
