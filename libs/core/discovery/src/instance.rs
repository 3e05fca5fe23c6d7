use serde::{Deserialize, Serialize};

/// Lifecycle status as reported to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    Up,
    Down,
    Starting,
    OutOfService,
    #[serde(other)]
    Unknown,
}

/// Port with the `$`/`@enabled` attribute encoding Eureka uses in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortInfo {
    #[serde(rename = "$")]
    pub value: u16,
    #[serde(rename = "@enabled")]
    pub enabled: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCenterInfo {
    #[serde(rename = "@class")]
    pub class: String,
    pub name: String,
}

impl Default for DataCenterInfo {
    fn default() -> Self {
        Self {
            class: "com.netflix.appinfo.InstanceInfo$DefaultDataCenterInfo".to_string(),
            name: "MyOwn".to_string(),
        }
    }
}

/// Instance document sent on registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub instance_id: String,
    pub host_name: String,
    pub app: String,
    pub ip_addr: String,
    pub vip_address: String,
    pub status: InstanceStatus,
    pub port: PortInfo,
    pub home_page_url: String,
    pub health_check_url: String,
    pub status_page_url: String,
    pub data_center_info: DataCenterInfo,
}

impl InstanceInfo {
    /// Instance of `app` reachable at `http://{host}:{port}/`.
    ///
    /// Application names are upper-cased as the registry stores them; the
    /// VIP address keeps the lower-case form clients look up by.
    pub fn new(app: &str, host: &str, port: u16) -> Self {
        let base = format!("http://{host}:{port}");
        Self {
            instance_id: format!("{host}:{}:{port}", app.to_lowercase()),
            host_name: host.to_string(),
            app: app.to_uppercase(),
            ip_addr: host.to_string(),
            vip_address: app.to_lowercase(),
            status: InstanceStatus::Up,
            port: PortInfo {
                value: port,
                enabled: "true".to_string(),
            },
            home_page_url: format!("{base}/"),
            health_check_url: format!("{base}/health"),
            status_page_url: format!("{base}/health"),
            data_center_info: DataCenterInfo::default(),
        }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host_name, self.port.value)
    }
}

/// `GET /apps/{APP}` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ApplicationEnvelope {
    pub application: Application,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Application {
    #[serde(default)]
    pub instance: OneOrMany<RegisteredInstance>,
}

/// The registry collapses single-element arrays into an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PortValue {
    Number(u16),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisteredPort {
    #[serde(rename = "$")]
    pub value: PortValue,
}

/// Subset of an instance record read back from the registry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisteredInstance {
    pub host_name: String,
    pub status: InstanceStatus,
    pub port: Option<RegisteredPort>,
    pub home_page_url: Option<String>,
}

impl RegisteredInstance {
    /// Base URL without trailing slash, preferring the advertised home page.
    pub fn base_url(&self) -> Option<String> {
        if let Some(url) = self.home_page_url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.trim_end_matches('/').to_string());
        }
        let port = match self.port.as_ref()?.value {
            PortValue::Number(port) => port,
            PortValue::Text(ref raw) => raw.parse().ok()?,
        };
        Some(format!("http://{}:{}", self.host_name, port))
    }
}
