use crate::{DiscoveryResult, EurekaClient};

/// Where a downstream service lives.
#[derive(Clone, Debug)]
pub enum ServiceEndpoint {
    /// Explicit base URL from configuration.
    Fixed(String),
    /// Looked up in the registry on every call; the first `UP` instance wins.
    Discovered { registry: EurekaClient, app: String },
}

impl ServiceEndpoint {
    /// Prefers an explicit URL, falls back to the registry, `None` when
    /// neither is available.
    pub fn resolve_from(
        explicit_url: Option<String>,
        registry: Option<&EurekaClient>,
        app: &str,
    ) -> Option<Self> {
        match (explicit_url, registry) {
            (Some(url), _) => Some(Self::Fixed(url.trim_end_matches('/').to_string())),
            (None, Some(registry)) => Some(Self::Discovered {
                registry: registry.clone(),
                app: app.to_string(),
            }),
            (None, None) => None,
        }
    }

    /// Base URL without trailing slash.
    pub async fn base_url(&self) -> DiscoveryResult<String> {
        match self {
            Self::Fixed(url) => Ok(url.clone()),
            Self::Discovered { registry, app } => registry.first_instance(app).await,
        }
    }
}
