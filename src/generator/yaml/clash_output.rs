use serde::{Deserialize, Serialize};

use crate::models::{
    DnsProfile, FlavorProfile, ListenPorts, ProxyGroupConfig, ProxyGroupType, TunProfile,
};

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Represents a complete generated Clash profile.
///
/// Field order is the key order of the emitted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashYamlOutput {
    // General settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socks_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixed_port: Option<u16>,
    pub allow_lan: bool,
    pub mode: String,
    pub log_level: String,
    pub external_controller: String,

    pub dns: ClashDns,
    pub tun: ClashTun,

    /// Source proxy entries, passed through untouched
    pub proxies: Vec<serde_yaml::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proxy_groups: Vec<ClashProxyGroup>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

impl ClashYamlOutput {
    /// Start a document from a flavor's fixed template, with no proxies yet
    pub fn from_profile(profile: &FlavorProfile) -> Self {
        let (port, socks_port, mixed_port) = match profile.ports {
            ListenPorts::Split { port, socks_port } => (Some(port), Some(socks_port), None),
            ListenPorts::Mixed(port) => (None, None, Some(port)),
        };

        Self {
            port,
            socks_port,
            mixed_port,
            allow_lan: profile.allow_lan,
            mode: profile.mode.to_string(),
            log_level: profile.log_level.to_string(),
            external_controller: profile.external_controller.to_string(),
            dns: ClashDns::from(&profile.dns),
            tun: ClashTun::from(&profile.tun),
            proxies: Vec::new(),
            proxy_groups: Vec::new(),
            rules: Vec::new(),
        }
    }
}

/// DNS configuration for Clash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashDns {
    pub enable: bool,
    pub enhanced_mode: String,
    pub fake_ip_range: String,
    pub nameserver: Vec<String>,
}

impl From<&DnsProfile> for ClashDns {
    fn from(dns: &DnsProfile) -> Self {
        Self {
            enable: dns.enable,
            enhanced_mode: dns.enhanced_mode.to_string(),
            fake_ip_range: dns.fake_ip_range.to_string(),
            nameserver: to_strings(dns.nameserver),
        }
    }
}

/// TUN configuration for Clash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashTun {
    pub enable: bool,
    pub stack: String,
    pub dns_hijack: Vec<String>,
    pub auto_route: bool,
    pub auto_detect_interface: bool,
    pub fallback: Vec<String>,
}

impl From<&TunProfile> for ClashTun {
    fn from(tun: &TunProfile) -> Self {
        Self {
            enable: tun.enable,
            stack: tun.stack.to_string(),
            dns_hijack: to_strings(tun.dns_hijack),
            auto_route: tun.auto_route,
            auto_detect_interface: tun.auto_detect_interface,
            fallback: to_strings(tun.fallback),
        }
    }
}

/// One entry of `proxy-groups`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClashProxyGroup {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: ProxyGroupType,
    pub proxies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

impl From<&ProxyGroupConfig> for ClashProxyGroup {
    fn from(group: &ProxyGroupConfig) -> Self {
        let (url, interval) = if group.group_type.is_health_checked() {
            (
                Some(group.url.clone()).filter(|u| !u.is_empty()),
                Some(group.interval).filter(|i| *i > 0),
            )
        } else {
            (None, None)
        };

        Self {
            name: group.name.clone(),
            group_type: group.group_type,
            proxies: group.proxies.clone(),
            url,
            interval,
        }
    }
}
