use mailform_core_form_impl::{
    digest::FormDigestServiceImpl, dispatch::FormDispatchServiceImpl, FormFeatureServiceImpl,
};
use mailform_email_impl::EmailServiceImpl;
use mailform_shared_impl::{dump::DumpServiceImpl, hash::HashServiceImpl, record::RecordServiceImpl};
use mailform_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = mailform_api_rest::RestServer<FormFeature, Template>;

// Email
pub type Email = EmailServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;

// Shared
pub type Hash = HashServiceImpl;
pub type Record = RecordServiceImpl;
pub type Dump = DumpServiceImpl;

// Core
pub type FormDigest = FormDigestServiceImpl<Hash, Record>;
pub type FormDispatch = FormDispatchServiceImpl<Email, Record>;
pub type FormFeature = FormFeatureServiceImpl<FormDigest, FormDispatch, Dump>;
