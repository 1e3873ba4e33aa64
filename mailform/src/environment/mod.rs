//! Construction of the service graph from the loaded configuration.

use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context};
use mailform_api_rest::{PageConfig, RealIpConfig, RestServerConfig};
use mailform_config::{Config, EmailConfig, HttpConfig, LogConfig, MailformConfig};
use mailform_core_form_impl::{
    digest::{FormDigestServiceConfig, FormDigestServiceImpl},
    dispatch::{FormDispatchServiceConfig, FormDispatchServiceImpl},
    FormFeatureConfig, FormFeatureServiceImpl,
};
use mailform_email_contracts::EmailService;
use mailform_email_impl::EmailServiceImpl;
use mailform_models::{form::SubmissionDefaults, Sensitive};
use mailform_shared_impl::{
    dump::DumpServiceImpl,
    hash::HashServiceImpl,
    record::{RecordServiceConfig, RecordServiceImpl},
};
use mailform_templates_contracts::Strings;
use mailform_templates_impl::TemplateServiceImpl;

pub mod types;

/// Sets up the SMTP transport and makes sure the server answers.
pub async fn email_service(config: &EmailConfig) -> anyhow::Result<types::Email> {
    let email = EmailServiceImpl::new(&config.smtp_url, config.from.clone())
        .await
        .context("Invalid SMTP configuration")?;
    email
        .ping()
        .await
        .context("Failed to connect to SMTP server")?;
    Ok(email)
}

pub fn rest_server(
    config: &Config,
    email: types::Email,
    server_name: String,
) -> anyhow::Result<types::RestServer> {
    let record = record_service(&config.log);

    let dispatch = FormDispatchServiceImpl::new(
        email,
        record.clone(),
        FormDispatchServiceConfig {
            recipient: config.mailform.recipient.clone().into(),
            subject_prefix: config.mailform.prefix.clone().into(),
            max_message_bytes: config.mailform.max_message_bytes,
            server_name: server_name.into(),
        },
    );

    let form = FormFeatureServiceImpl::new(
        digest_service_with(config, record),
        dispatch,
        DumpServiceImpl::new(config.log.dump.clone().map(Arc::new)),
        FormFeatureConfig {
            defaults: submission_defaults(&config.mailform).into(),
            debug: config.mailform.debug,
        },
    );

    let templates = TemplateServiceImpl::new()?;

    Ok(types::RestServer::new(
        form,
        templates,
        rest_server_config(config),
    ))
}

pub fn digest_service(config: &Config) -> types::FormDigest {
    digest_service_with(config, record_service(&config.log))
}

fn digest_service_with(config: &Config, record: types::Record) -> types::FormDigest {
    FormDigestServiceImpl::new(
        HashServiceImpl::new(config.mailform.hash_algorithm),
        record,
        FormDigestServiceConfig {
            salt: Sensitive(Arc::new(config.mailform.salt.0.clone())),
        },
    )
}

fn record_service(config: &LogConfig) -> types::Record {
    let path = |path: &Option<PathBuf>| path.clone().map(Arc::new);
    RecordServiceImpl::new(RecordServiceConfig {
        messages: path(&config.messages),
        digest_failures: path(&config.digest_failures),
    })
}

fn rest_server_config(config: &Config) -> RestServerConfig {
    let strings = Strings::of(config.mailform.language);
    RestServerConfig {
        real_ip: config.http.real_ip.as_ref().map(|real_ip| {
            RealIpConfig {
                header: real_ip.header.clone(),
                set_from: real_ip.set_from,
            }
            .into()
        }),
        page: PageConfig {
            language: config.mailform.language,
            greeting: config
                .mailform
                .greeting
                .clone()
                .unwrap_or_else(|| strings.greeting.into()),
            show_placeholders: config.mailform.show_placeholders,
            textarea_rows: config.mailform.textarea_rows,
        }
        .into(),
    }
}

/// Defaults for omitted optional fields, in the configured language.
pub fn submission_defaults(config: &MailformConfig) -> SubmissionDefaults {
    let strings = Strings::of(config.language);
    SubmissionDefaults {
        sender_name: strings.default_from.into(),
        subject: strings.default_subject.into(),
    }
}

/// Returns the configured server name, falling back to the machine hostname.
pub fn server_name(config: &HttpConfig) -> anyhow::Result<String> {
    match &config.server_name {
        Some(name) => Ok(name.clone()),
        None => hostname::get()
            .context("Failed to determine hostname")?
            .into_string()
            .map_err(|name| anyhow!("Hostname {name:?} is not valid UTF-8")),
    }
}

#[cfg(test)]
mod tests {
    use mailform_config::DEFAULT_CONFIG_PATH;
    use mailform_core_form_contracts::digest::FormDigestService;
    use mailform_models::{form::FormSubmission, language::Language};
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> Config {
        mailform_config::load(&[DEFAULT_CONFIG_PATH]).unwrap()
    }

    #[test]
    fn defaults_follow_language() {
        let mut config = config().mailform;

        config.language = Language::De;
        assert_eq!(
            submission_defaults(&config),
            SubmissionDefaults {
                sender_name: "Anonym".into(),
                subject: "Kommentar".into(),
            }
        );

        config.language = Language::En;
        assert_eq!(submission_defaults(&config).sender_name, "Anonymous");
    }

    #[test]
    fn configured_server_name() {
        let mut config = config().http;
        config.server_name = Some("example.com".into());

        let result = server_name(&config).unwrap();

        assert_eq!(result, "example.com");
    }

    #[test]
    fn digest_uses_configured_salt() {
        let mut config = config();
        config.mailform.salt = Sensitive("some salt".into());
        let submission = FormSubmission {
            sender_name: "a".into(),
            sender_email: "b".into(),
            subject: "c".into(),
            body: "d".into(),
        };

        let result = digest_service(&config).compute(&submission);

        assert_eq!(
            result.as_str(),
            "6be832f95a8364b9780df015100556de73f663338d96f82a704877d99f1851e9"
        );
    }
}
