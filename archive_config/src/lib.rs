use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use archive_models::{email_address::EmailAddress, locale::Locale};
use archive_utils::non_blank;
use config::{Environment, File, FileFormat};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

/// Environment variable listing additional config files, separated like
/// `PATH`.
pub const CONFIG_PATHS_ENV: &str = "ARCHIVE_CONFIG";

/// Prefix of environment variables overriding single config values, e.g.
/// `ARCHIVE__CONTACTUS__RECIPIENT`.
pub const ENV_PREFIX: &str = "ARCHIVE";

pub const DEFAULT_CONFIG: &str = archive_assets::CONFIG_TOML;

/// Load the default config, the files listed in [`CONFIG_PATHS_ENV`] and the
/// environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    paths
        .iter()
        .try_fold(builder, |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub templates: TemplatesConfig,
    pub jwt: JwtConfig,
    pub session: SessionConfig,
    pub health: HealthConfig,
    pub contactus: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct TemplatesConfig {
    pub dir: Option<PathBuf>,
    pub default_locale: Option<Locale>,
}

#[derive(Debug, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    pub access_token_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    recipient: Option<String>,
}

impl ContactConfig {
    /// The configured recipient of contact form emails, or `None` if the
    /// contact form is disabled.
    pub fn recipient(&self) -> anyhow::Result<Option<EmailAddress>> {
        non_blank(self.recipient.as_deref())
            .map(|recipient| {
                recipient.trim().parse().with_context(|| {
                    format!("Invalid contact recipient email address: {recipient:?}")
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[] as &[&Path]).unwrap();
        assert_eq!(config.contactus.recipient().unwrap(), None);
        assert_eq!(config.templates.default_locale.unwrap().as_str(), "en");
    }

    #[test]
    fn load_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[contactus]\nrecipient = \"support@example.org\"").unwrap();

        let config = load_paths(&[file.path()]).unwrap();

        assert_eq!(
            config.contactus.recipient().unwrap(),
            Some("support@example.org".parse().unwrap())
        );
        assert_eq!(config.email.smtp_url, "smtp://127.0.0.1:2525");
    }

    #[test]
    fn load_missing_file() {
        let result = load_paths(&[Path::new("/does/not/exist.toml")]);
        assert!(result.is_err());
    }

    #[test]
    fn recipient() {
        for (input, expected) in [
            (None, Some(None)),
            (Some(""), Some(None)),
            (Some("   "), Some(None)),
            (Some("support@example.org"), Some(Some("support@example.org"))),
            (Some(" support@example.org "), Some(Some("support@example.org"))),
            (Some("support"), None),
        ] {
            let config = ContactConfig {
                recipient: input.map(Into::into),
            };
            let result = config.recipient().ok().map(|recipient| {
                recipient.map(|x| x.as_str().to_owned())
            });
            assert_eq!(
                result,
                expected.map(|x| x.map(ToOwned::to_owned)),
                "{input:?}"
            );
        }
    }
}
