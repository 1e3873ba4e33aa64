use clap::Args;
use mailform_config::Config;
use mailform_core_form_contracts::digest::FormDigestService;
use mailform_models::{
    form::{FormFields, FormSubmission},
    hash::HashAlgorithm,
};

use crate::environment;

/// Field values to compute the digest for, as they would be submitted
#[derive(Debug, Args)]
pub struct DigestCommand {
    #[arg(long)]
    from: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    message: Option<String>,
    /// Hash algorithm to use instead of the configured one (md5, sha256 or
    /// sha512)
    #[arg(long)]
    algorithm: Option<HashAlgorithm>,
}

impl DigestCommand {
    pub fn invoke(self, mut config: Config) -> anyhow::Result<()> {
        if let Some(algorithm) = self.algorithm {
            config.mailform.hash_algorithm = algorithm;
        }

        let fields = FormFields {
            from: self.from,
            email: self.email,
            subject: self.subject,
            message: self.message,
            digest: None,
            content_length: None,
        };
        let submission = FormSubmission::from_fields(
            &fields,
            &environment::submission_defaults(&config.mailform),
        );

        let digest = environment::digest_service(&config).compute(&submission);

        println!("mail_digest={digest}");
        println!("mail_content_length={}", submission.body_len());

        Ok(())
    }
}
