use std::sync::Arc;

use archive_api_rest::RestServerConfig;
use archive_auth_impl::AuthServiceConfig;
use archive_config::Config;
use archive_core_contact_impl::ContactFeatureConfig;
use archive_core_health_impl::HealthFeatureConfig;
use archive_di::provider;
use archive_shared_impl::jwt::JwtServiceConfig;
use archive_templates_impl::TemplateServiceConfig;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Shared
            JwtServiceConfig,
            TemplateServiceConfig,

            // Auth
            AuthServiceConfig,

            // Core
            ContactFeatureConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Shared
        jwt_service_config: JwtServiceConfig,
        template_service_config: TemplateServiceConfig,

        // Auth
        auth_service_config: AuthServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            addr: config.http.address,
        };

        // Shared
        let jwt_service_config = JwtServiceConfig::new(&config.jwt.secret)?;

        let template_service_config = TemplateServiceConfig {
            dir: config.templates.dir.clone(),
            default_locale: config.templates.default_locale.clone(),
        };

        // Auth
        let auth_service_config = AuthServiceConfig {
            access_token_ttl: config.session.access_token_ttl.into(),
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contactus.recipient()?.map(Arc::new),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Ok(Self {
            _cache: Default::default(),
            rest_server_config,
            jwt_service_config,
            template_service_config,
            auth_service_config,
            contact_feature_config,
            health_feature_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use archive_di::Provides;

    use super::*;

    #[tokio::test]
    async fn provide_rest_server() {
        // Arrange
        let config = archive_config::load_paths(&[] as &[&Path]).unwrap();
        let email = crate::email::connect(&config.email).await.unwrap();

        // Act
        let config_provider = ConfigProvider::new(&config).unwrap();
        let mut provider = Provider::new(config_provider, email);
        let _: types::RestServer = provider.provide();
        let contact: ContactFeatureConfig = provider.provide();

        // Assert
        assert!(contact.recipient.is_none());
    }

    #[test]
    fn contactus_recipient() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"[contactus]\nrecipient = \"support@example.org\"\n",
        )
        .unwrap();
        let config = archive_config::load_paths(&[file.path()]).unwrap();

        // Act
        let mut provider = ConfigProvider::new(&config).unwrap();
        let contact: ContactFeatureConfig = provider.provide();

        // Assert
        assert_eq!(
            contact.recipient.as_deref().map(|x| x.as_str()),
            Some("support@example.org")
        );
    }

    #[test]
    fn invalid_recipient() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[contactus]\nrecipient = \"support\"\n").unwrap();
        let config = archive_config::load_paths(&[file.path()]).unwrap();

        assert!(ConfigProvider::new(&config).is_err());
    }
}
