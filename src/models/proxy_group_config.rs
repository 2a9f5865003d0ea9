use serde::{Deserialize, Serialize};

/// Type of proxy group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProxyGroupType {
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "url-test")]
    URLTest,
    #[serde(rename = "fallback")]
    Fallback,
}

impl ProxyGroupType {
    /// Get string representation of the proxy group type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyGroupType::Select => "select",
            ProxyGroupType::URLTest => "url-test",
            ProxyGroupType::Fallback => "fallback",
        }
    }

    /// Whether the group runs a health check against its members
    pub fn is_health_checked(&self) -> bool {
        matches!(self, ProxyGroupType::URLTest | ProxyGroupType::Fallback)
    }
}

/// Configuration for a proxy group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyGroupConfig {
    /// Name of the proxy group
    pub name: String,
    /// Type of the proxy group
    pub group_type: ProxyGroupType,
    /// Proxy or group names in this group, in display order
    pub proxies: Vec<String>,
    /// URL for testing
    pub url: String,
    /// Interval in seconds between tests
    pub interval: u32,
}

impl ProxyGroupConfig {
    /// Create a new proxy group config
    pub fn new(name: impl Into<String>, group_type: ProxyGroupType) -> Self {
        Self {
            name: name.into(),
            group_type,
            proxies: Vec::new(),
            url: String::new(),
            interval: 0,
        }
    }

    pub fn with_proxies(mut self, proxies: Vec<String>) -> Self {
        self.proxies = proxies;
        self
    }

    pub fn with_health_check(mut self, url: &str, interval: u32) -> Self {
        self.url = url.to_string();
        self.interval = interval;
        self
    }

    /// Get string representation of the group type
    pub fn type_str(&self) -> &'static str {
        self.group_type.as_str()
    }
}

/// A collection of proxy group configurations
pub type ProxyGroupConfigs = Vec<ProxyGroupConfig>;
