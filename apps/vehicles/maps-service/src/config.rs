use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use discovery::DiscoveryConfig;

pub use core_config::Environment;

pub const DEFAULT_PORT: u16 = 9191;

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub discovery: DiscoveryConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env_with_port(DEFAULT_PORT)?,
            discovery: DiscoveryConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_no_database() {
        temp_env::with_vars(
            [("DATABASE_URL", None::<&str>), ("PORT", None), ("DISCOVERY_HEARTBEAT_SECS", None)],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "maps-service");
                assert_eq!(config.server.port, DEFAULT_PORT);
            },
        );
    }

    #[test]
    fn test_zero_heartbeat_is_rejected() {
        temp_env::with_var("DISCOVERY_HEARTBEAT_SECS", Some("0"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
