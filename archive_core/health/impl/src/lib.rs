use std::{sync::Arc, time::Duration};

use archive_core_health_contracts::{HealthFeatureService, HealthStatus};
use archive_di::Build;
use archive_email_contracts::EmailService;
use archive_shared_contracts::time::TimeService;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Email> {
    time: Time,
    email: Email,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Email> HealthFeatureService for HealthFeatureServiceImpl<Time, Email>
where
    Time: TimeService,
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        cache_guard
            .insert(CachedStatus {
                status: HealthStatus { email },
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use archive_demo::NOW;
    use archive_email_contracts::MockEmailService;
    use archive_shared_contracts::time::MockTimeService;

    use super::*;

    const TTL: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn cached() {
        // Arrange
        let time = MockTimeService::new()
            .with_now(*NOW)
            .with_now(*NOW + Duration::from_secs(1));
        let email = MockEmailService::new().with_ping(true);

        let sut = HealthFeatureServiceImpl {
            time,
            email,
            config: HealthFeatureConfig { cache_ttl: TTL },
            state: Default::default(),
        };

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, HealthStatus { email: true });
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn expired() {
        // Arrange
        let time = MockTimeService::new()
            .with_now(*NOW)
            .with_now(*NOW + TTL);
        let email = MockEmailService::new().with_ping(true).with_ping(false);

        let sut = HealthFeatureServiceImpl {
            time,
            email,
            config: HealthFeatureConfig { cache_ttl: TTL },
            state: Default::default(),
        };

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, HealthStatus { email: true });
        assert_eq!(second, HealthStatus { email: false });
    }
}
