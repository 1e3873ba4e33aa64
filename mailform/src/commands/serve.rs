use anyhow::Context;
use mailform_config::Config;
use tokio::net::TcpListener;
use tracing::info;

use crate::environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = environment::email_service(&config.email).await?;

    let listener = TcpListener::bind(config.http.address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.http.address))?;
    let server_name = environment::server_name(&config.http)?;
    info!("Serving contact form for {server_name}");

    let rest_server = environment::rest_server(&config, email, server_name)?;
    rest_server.serve(listener).await
}
