use reqwest::{Client, StatusCode, header};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use crate::instance::{ApplicationEnvelope, InstanceStatus};
use crate::{DiscoveryError, DiscoveryResult, InstanceInfo};

/// Result of a heartbeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewOutcome {
    Renewed,
    /// The registry no longer knows the instance; it must register again.
    Unknown,
}

/// REST client for a Eureka-compatible registry rooted at `base_url`
/// (for example `http://registry:8761/eureka`).
#[derive(Clone, Debug)]
pub struct EurekaClient {
    client: Client,
    base_url: String,
}

impl EurekaClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(base_url: &str) -> DiscoveryResult<Self> {
        let client = Client::builder().timeout(Self::REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn app_url(&self, app: &str) -> String {
        format!("{}/apps/{}", self.base_url, app.to_uppercase())
    }

    fn instance_url(&self, app: &str, instance_id: &str) -> String {
        format!("{}/{}", self.app_url(app), instance_id)
    }

    /// `POST /apps/{APP}` with the instance document.
    pub async fn register(&self, instance: &InstanceInfo) -> DiscoveryResult<()> {
        let response = self
            .client
            .post(self.app_url(&instance.app))
            .json(&json!({ "instance": instance }))
            .send()
            .await?;

        expect_success("register", response.status())?;
        info!(
            app = %instance.app,
            instance_id = %instance.instance_id,
            "Registered with service registry"
        );
        Ok(())
    }

    /// `PUT /apps/{APP}/{instanceId}`.
    pub async fn renew(&self, app: &str, instance_id: &str) -> DiscoveryResult<RenewOutcome> {
        let response = self
            .client
            .put(self.instance_url(app, instance_id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(RenewOutcome::Unknown);
        }
        expect_success("renew", response.status())?;
        debug!(app, instance_id, "Lease renewed");
        Ok(RenewOutcome::Renewed)
    }

    /// `DELETE /apps/{APP}/{instanceId}`. An instance the registry has
    /// already dropped counts as deregistered.
    pub async fn deregister(&self, app: &str, instance_id: &str) -> DiscoveryResult<()> {
        let response = self
            .client
            .delete(self.instance_url(app, instance_id))
            .send()
            .await?;

        if response.status() != StatusCode::NOT_FOUND {
            expect_success("deregister", response.status())?;
        }
        info!(app, instance_id, "Deregistered from service registry");
        Ok(())
    }

    /// Base URLs of the `UP` instances of `app`, in registry order.
    pub async fn instances(&self, app: &str) -> DiscoveryResult<Vec<String>> {
        let response = self
            .client
            .get(self.app_url(app))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        expect_success("instances", response.status())?;

        let envelope: ApplicationEnvelope = response.json().await?;
        Ok(envelope
            .application
            .instance
            .into_vec()
            .into_iter()
            .filter(|instance| instance.status == InstanceStatus::Up)
            .filter_map(|instance| instance.base_url())
            .collect())
    }

    /// First `UP` instance of `app`.
    pub async fn first_instance(&self, app: &str) -> DiscoveryResult<String> {
        self.instances(app)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DiscoveryError::NoInstance(app.to_uppercase()))
    }
}

fn expect_success(operation: &'static str, status: StatusCode) -> DiscoveryResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(DiscoveryError::UnexpectedStatus {
            operation,
            status: status.as_u16(),
        })
    }
}
