use anyhow::ensure;
use clap::Subcommand;
use mailform_config::Config;
use mailform_email_contracts::{Email, EmailHeader, EmailService};
use mailform_models::email_address::EmailAddress;
use mailform_utils::mailform_version;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_service = environment::email_service(&config.email).await?;

    let ok = email_service
        .send(Email {
            recipient: recipient.to_string(),
            subject: format!("{}: Email Deliverability Test", config.mailform.prefix),
            body: "Email deliverability seems to be working!".into(),
            reply_to: None,
            headers: vec![EmailHeader::new(
                "X-Mailer",
                format!("mailform/{}", mailform_version()),
            )],
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
