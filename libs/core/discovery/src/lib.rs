//! Client side of a Eureka-compatible service registry.
//!
//! - [`EurekaClient`]: the four REST calls (register, renew, deregister,
//!   list instances)
//! - [`Registration`]: a registered instance with its heartbeat task, owned
//!   by the binary and torn down during shutdown
//! - [`ServiceEndpoint`]: a fixed base URL or one looked up in the registry
//!
//! ```ignore
//! let config = DiscoveryConfig::from_env()?;
//! let registration = match config.client()? {
//!     Some(client) => {
//!         let instance = config.instance("pricing-service", server.port);
//!         Some(Registration::start(client, instance, config.heartbeat_interval).await)
//!     }
//!     None => None,
//! };
//! // ... serve ...
//! if let Some(registration) = registration {
//!     registration.deregister().await;
//! }
//! ```

mod client;
mod config;
mod endpoint;
mod error;
mod instance;
mod registration;

pub use client::{EurekaClient, RenewOutcome};
pub use config::DiscoveryConfig;
pub use endpoint::ServiceEndpoint;
pub use error::{DiscoveryError, DiscoveryResult};
pub use instance::{DataCenterInfo, InstanceInfo, InstanceStatus, PortInfo};
pub use registration::Registration;
