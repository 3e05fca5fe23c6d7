use core_config::{AppInfo, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::postgres::PostgresConfig;
use discovery::DiscoveryConfig;

pub use core_config::Environment;

pub const DEFAULT_PORT: u16 = 8082;

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub discovery: DiscoveryConfig,
    /// `RUN_MIGRATIONS`, default true; also seeds prices for vehicles 1..=19
    pub run_migrations: bool,
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
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/vehicles")),
                ("PORT", None),
                ("RUN_MIGRATIONS", Some("false")),
                ("DISCOVERY_URL", Some("http://registry:8761/eureka/")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "pricing-service");
                assert_eq!(config.server.port, DEFAULT_PORT);
                assert!(!config.run_migrations);
                assert_eq!(
                    config.discovery.registry_url.as_deref(),
                    Some("http://registry:8761/eureka")
                );
            },
        );
    }
}
