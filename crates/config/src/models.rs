use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSettings,
    #[serde(default = "super::defaults::registry_settings")]
    pub registry: RegistrySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "super::defaults::tcp_nodelay")]
    pub tcp_nodelay: bool,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrySettings {
    /// Allow-listed image names, compared case-insensitively against the
    /// first path segment of incoming requests.
    #[serde(default = "super::defaults::images")]
    pub images: Vec<String>,
    /// Where `GET /` sends visitors.
    #[serde(default = "super::defaults::landing_url")]
    pub landing_url: String,
}
