use core_config::{ConfigError, FromEnv, env_optional, env_or_default, env_parse_or};
use std::time::Duration;

use crate::{DiscoveryResult, EurekaClient, InstanceInfo};

/// Registry settings.
///
/// - `DISCOVERY_URL`: registry base URL, e.g. `http://registry:8761/eureka`.
///   Registration is disabled when unset.
/// - `DISCOVERY_APP_NAME`: application name; defaults to the crate name.
/// - `DISCOVERY_INSTANCE_HOST`: host advertised to other services
///   (default `localhost`).
/// - `DISCOVERY_HEARTBEAT_SECS`: renewal interval (default 30).
#[derive(Clone, Debug)]
pub struct DiscoveryConfig {
    pub registry_url: Option<String>,
    pub app_name: Option<String>,
    pub instance_host: String,
    pub heartbeat_interval: Duration,
}

impl DiscoveryConfig {
    pub fn is_enabled(&self) -> bool {
        self.registry_url.is_some()
    }

    /// Client for the configured registry, `None` when discovery is off.
    pub fn client(&self) -> DiscoveryResult<Option<EurekaClient>> {
        self.registry_url
            .as_deref()
            .map(EurekaClient::new)
            .transpose()
    }

    /// Instance document for this process listening on `port`.
    pub fn instance(&self, default_app_name: &str, port: u16) -> InstanceInfo {
        let app = self.app_name.as_deref().unwrap_or(default_app_name);
        InstanceInfo::new(app, &self.instance_host, port)
    }
}

impl FromEnv for DiscoveryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let heartbeat_secs = env_parse_or("DISCOVERY_HEARTBEAT_SECS", 30u64)?;
        if heartbeat_secs == 0 {
            return Err(ConfigError::ParseError {
                key: "DISCOVERY_HEARTBEAT_SECS".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            registry_url: env_optional("DISCOVERY_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            app_name: env_optional("DISCOVERY_APP_NAME"),
            instance_host: env_or_default("DISCOVERY_INSTANCE_HOST", "localhost"),
            heartbeat_interval: Duration::from_secs(heartbeat_secs),
        })
    }
}
