use std::{net::IpAddr, sync::Arc};

use axum::Router;
use mailform_core_form_contracts::FormFeatureService;
use mailform_models::language::Language;
use mailform_templates_contracts::TemplateService;
use tokio::net::TcpListener;
use tracing::info;

mod extractors;
mod middlewares;

pub use middlewares::client_ip::ConnectionAddrs;
mod models;
mod page;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Form, Templates> {
    form: Form,
    templates: Templates,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub real_ip: Option<Arc<RealIpConfig>>,
    pub page: Arc<PageConfig>,
}

/// Trust a header for the client address when the peer is a known proxy.
#[derive(Debug, Clone)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

/// Presentation settings of the rendered pages.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub language: Language,
    pub greeting: String,
    pub show_placeholders: bool,
    pub textarea_rows: u32,
}

impl<Form, Templates> RestServer<Form, Templates>
where
    Form: FormFeatureService,
    Templates: TemplateService,
{
    pub fn new(form: Form, templates: Templates, config: RestServerConfig) -> Self {
        Self {
            form,
            templates,
            config,
        }
    }

    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        info!("Listening on {}", listener.local_addr()?);
        let router = self.router();
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<ConnectionAddrs>(),
        )
        .await
        .map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = routes::form::router(Arc::new(routes::form::FormState {
            form: self.form,
            templates: self.templates,
            page: self.config.page,
        }));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::client_ip::add(self.config.real_ip)(router)
    }
}
