use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::{EurekaClient, InstanceInfo, RenewOutcome};

/// A registered instance and its heartbeat task.
///
/// Created by [`Registration::start`] during startup and consumed by
/// [`Registration::deregister`] during shutdown.
pub struct Registration {
    client: EurekaClient,
    instance: InstanceInfo,
    stop: Option<oneshot::Sender<()>>,
    heartbeat: JoinHandle<()>,
}

impl Registration {
    /// Registers `instance` and spawns the heartbeat.
    ///
    /// An unreachable registry is logged and does not fail startup; the
    /// heartbeat keeps retrying the registration every `interval`.
    pub async fn start(client: EurekaClient, instance: InstanceInfo, interval: Duration) -> Self {
        let registered = match client.register(&instance).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    app = %instance.app,
                    registry = client.base_url(),
                    "Service registry unavailable, will retry: {}",
                    e
                );
                false
            }
        };

        let (stop_tx, stop_rx) = oneshot::channel();
        let heartbeat = tokio::spawn(heartbeat_loop(
            client.clone(),
            instance.clone(),
            interval,
            registered,
            stop_rx,
        ));

        Self {
            client,
            instance,
            stop: Some(stop_tx),
            heartbeat,
        }
    }

    pub fn instance(&self) -> &InstanceInfo {
        &self.instance
    }

    /// Stops the heartbeat and removes the instance from the registry.
    pub async fn deregister(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Err(e) = (&mut self.heartbeat).await {
            error!("Heartbeat task ended abnormally: {}", e);
        }

        if let Err(e) = self
            .client
            .deregister(&self.instance.app, &self.instance.instance_id)
            .await
        {
            warn!(app = %self.instance.app, "Failed to deregister: {}", e);
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.heartbeat.abort();
    }
}

async fn heartbeat_loop(
    client: EurekaClient,
    instance: InstanceInfo,
    interval: Duration,
    mut registered: bool,
    mut stop: oneshot::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // first tick completes immediately
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = &mut stop => {
                info!(app = %instance.app, "Heartbeat stopped");
                return;
            }
            _ = ticker.tick() => {
                registered = beat(&client, &instance, registered).await;
            }
        }
    }
}

/// One heartbeat; returns whether the instance is registered afterwards.
async fn beat(client: &EurekaClient, instance: &InstanceInfo, registered: bool) -> bool {
    if registered {
        match client.renew(&instance.app, &instance.instance_id).await {
            Ok(RenewOutcome::Renewed) => return true,
            Ok(RenewOutcome::Unknown) => {
                info!(app = %instance.app, "Registry forgot this instance, registering again");
            }
            Err(e) => {
                warn!(app = %instance.app, "Lease renewal failed: {}", e);
                return true;
            }
        }
    }

    match client.register(instance).await {
        Ok(()) => true,
        Err(e) => {
            warn!(app = %instance.app, "Registration attempt failed: {}", e);
            false
        }
    }
}
