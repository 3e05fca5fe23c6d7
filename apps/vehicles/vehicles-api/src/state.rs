//! Shared application state.

use database::postgres::DatabaseConnection;
use discovery::EurekaClient;

/// Cloned into the readiness handler; the domain router owns its own
/// service built from these handles.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
    /// Present when `DISCOVERY_URL` is set
    pub registry: Option<EurekaClient>,
}
