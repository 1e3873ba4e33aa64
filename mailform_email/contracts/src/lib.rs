use std::future::Future;

use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hands the email to the mail transport.
    ///
    /// Returns whether the transport accepted the message, or the error that
    /// prevented delivery.
    fn send(&self, email: Email) -> impl Future<Output = Result<bool, TransportError>> + Send;

    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Destination address
    pub recipient: String,
    pub subject: String,
    /// Plain text body
    pub body: String,
    pub reply_to: Option<Mailbox>,
    /// Additional headers, in order
    pub headers: Vec<EmailHeader>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailHeader {
    pub name: &'static str,
    pub value: String,
}

impl EmailHeader {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Low-level failure reported by the mail transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at {location})")]
pub struct TransportError {
    /// Description of what went wrong
    pub message: String,
    /// Where it went wrong, e.g. the SMTP endpoint
    pub location: String,
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, email: Email, error: TransportError) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Err(error))));
        self
    }
}
