use archive_auth_contracts::AuthService;
use archive_config::{Config, Duration};
use archive_di::Provides;
use archive_models::email_address::EmailAddress;
use clap::Subcommand;
use uuid::Uuid;

use crate::environment::{types::Auth, ConfigProvider};

#[derive(Debug, Subcommand)]
pub enum JwtCommand {
    /// Issue an access token
    Issue {
        /// The email address of the user
        email: EmailAddress,
        /// The id of the user, random if omitted
        #[arg(long)]
        user_id: Option<Uuid>,
        /// The time to live, e.g. `30m` or `1d 12h`
        #[arg(long)]
        ttl: Option<Duration>,
    },
}

impl JwtCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            JwtCommand::Issue {
                email,
                user_id,
                ttl,
            } => issue(config, email, user_id, ttl),
        }
    }
}

fn issue(
    mut config: Config,
    email: EmailAddress,
    user_id: Option<Uuid>,
    ttl: Option<Duration>,
) -> anyhow::Result<()> {
    if let Some(ttl) = ttl {
        config.session.access_token_ttl = ttl;
    }

    let mut provider = ConfigProvider::new(&config)?;
    let auth: Auth = provider.provide();

    let user_id = user_id.unwrap_or_else(Uuid::new_v4).into();
    let token = auth.issue_access_token(user_id, email)?;
    println!("{}", token.0);

    Ok(())
}
