use core_config::{AppInfo, FromEnv, app_info, env_optional, env_parse_or, server::ServerConfig};
use database::postgres::PostgresConfig;
use discovery::DiscoveryConfig;

pub use core_config::Environment;

pub const DEFAULT_PORT: u16 = 8080;

/// Application-specific configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub discovery: DiscoveryConfig,
    /// `RUN_MIGRATIONS`, default true
    pub run_migrations: bool,
    /// `PRICING_SERVICE_URL`; the registry is asked when unset
    pub pricing_url: Option<String>,
    /// `MAPS_SERVICE_URL`; the registry is asked when unset
    pub maps_url: Option<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env_with_port(DEFAULT_PORT)?,
            database: PostgresConfig::from_env()?,
            discovery: DiscoveryConfig::from_env()?,
            run_migrations: env_parse_or("RUN_MIGRATIONS", true)?,
            pricing_url: env_optional("PRICING_SERVICE_URL"),
            maps_url: env_optional("MAPS_SERVICE_URL"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/vehicles")),
                ("PORT", None),
                ("RUN_MIGRATIONS", None),
                ("PRICING_SERVICE_URL", None),
                ("MAPS_SERVICE_URL", Some("http://maps:9191")),
                ("DISCOVERY_URL", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "vehicles-api");
                assert_eq!(config.server.port, DEFAULT_PORT);
                assert!(config.run_migrations);
                assert!(config.pricing_url.is_none());
                assert_eq!(config.maps_url.as_deref(), Some("http://maps:9191"));
                assert!(!config.discovery.is_enabled());
            },
        );
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/vehicles")),
                ("RUN_MIGRATIONS", Some("maybe")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
