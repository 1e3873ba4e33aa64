use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, OriginalUri, State},
    response::{Html, IntoResponse, Response},
    routing, Extension, Form, Router,
};
use mailform_core_form_contracts::FormFeatureService;
use mailform_models::{form::FormFields, request::RequestContext};
use mailform_templates_contracts::TemplateService;
use tracing::debug;

use super::internal_server_error;
use crate::{
    extractors::user_agent::UserAgent,
    middlewares::client_ip::{ClientIp, ServerIp},
    models::ApiFormFields,
    page,
    PageConfig,
};

pub struct FormState<F, T> {
    pub form: F,
    pub templates: T,
    pub page: Arc<PageConfig>,
}

pub fn router<F, T>(state: Arc<FormState<F, T>>) -> Router<()>
where
    F: FormFeatureService,
    T: TemplateService,
{
    Router::new()
        .route("/", routing::get(handle::<F, T>).post(handle::<F, T>))
        .with_state(state)
}

async fn handle<F, T>(
    State(state): State<Arc<FormState<F, T>>>,
    Extension(ClientIp(client_ip)): Extension<ClientIp>,
    Extension(ServerIp(server_ip)): Extension<ServerIp>,
    UserAgent(user_agent): UserAgent,
    OriginalUri(uri): OriginalUri,
    fields: Result<Form<ApiFormFields>, FormRejection>,
) -> Response
where
    F: FormFeatureService,
    T: TemplateService,
{
    let fields = match fields {
        Ok(Form(fields)) => fields.into(),
        Err(err) => {
            debug!("treating undecodable form data as empty: {err}");
            FormFields::default()
        }
    };
    let context = RequestContext {
        client_ip,
        server_ip,
        user_agent,
        script: uri.path().into(),
    };
    let action = context.script.clone();

    let response = state.form.process(fields, context).await;

    match page::render(&state.templates, &state.page, &response, action) {
        Ok(html) => Html(html).into_response(),
        Err(err) => internal_server_error(err),
    }
}
