use archive_config::Config;
use archive_di::Provides;
use archive_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{
    email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let config_provider = ConfigProvider::new(&config)?;

    if config.contactus.recipient()?.is_none() {
        warn!("No contact recipient is configured, the contact form is disabled");
    }

    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let mut provider = Provider::new(config_provider, email);
    let server: RestServer = provider.provide();
    server.serve().await
}
