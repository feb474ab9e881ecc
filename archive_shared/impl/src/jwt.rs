use std::{fmt::Debug, sync::Arc, time::Duration};

use anyhow::Context;
use archive_di::Build;
use archive_shared_contracts::{
    jwt::{JwtService, VerifyJwtError},
    time::TimeService,
};
use archive_utils::trace_instrument;
use hmac::{digest::KeyInit, Hmac};
use jwt::{SignWithKey, VerifyWithKey};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::Sha256;

#[derive(Debug, Clone, Build)]
pub struct JwtServiceImpl<Time> {
    time: Time,
    config: JwtServiceConfig,
}

#[derive(Debug, Clone)]
pub struct JwtServiceConfig {
    jwt_secret: Arc<Hmac<Sha256>>,
}

impl JwtServiceConfig {
    pub fn new(jwt_secret: &str) -> anyhow::Result<Self> {
        Ok(Self {
            jwt_secret: Hmac::new_from_slice(jwt_secret.as_bytes())
                .context("Failed to load JWT secret")?
                .into(),
        })
    }
}

impl<Time> JwtService for JwtServiceImpl<Time>
where
    Time: TimeService,
{
    #[trace_instrument(skip(self))]
    fn sign<T: Serialize + Debug + 'static>(
        &self,
        data: T,
        ttl: Duration,
    ) -> anyhow::Result<String> {
        let now = self.time.now().timestamp() as u64;
        let exp = now + ttl.as_secs();

        JwtData { exp, data }
            .sign_with_key(&*self.config.jwt_secret)
            .context("Failed to sign JWT")
    }

    #[trace_instrument(skip(self, jwt))]
    fn verify<T: DeserializeOwned + Debug + 'static>(
        &self,
        jwt: &str,
    ) -> Result<T, VerifyJwtError<T>> {
        let JwtData { exp, data } = jwt
            .verify_with_key(&*self.config.jwt_secret)
            .map_err(|_| VerifyJwtError::Invalid)?;

        let now = self.time.now().timestamp() as u64;
        if now < exp {
            Ok(data)
        } else {
            Err(VerifyJwtError::Expired(data))
        }
    }
}

#[derive(Serialize, Deserialize)]
struct JwtData<T> {
    exp: u64,
    #[serde(flatten)]
    data: T,
}
