//! Fixed template data describing one output flavor.

use std::fmt;

use crate::constants::{DESKTOP_PROFILE, MOBILE_PROFILE, WINDOWS_PROFILE};

/// Client target a profile is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// SubZ profile for the mobile client, no groups or rules
    Mobile,
    /// Sub-Win profile produced alongside SubZ by the combined run
    Desktop,
    /// Stand-alone trimmed Sub-Win profile
    Windows,
}

impl Flavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Mobile => "mobile",
            Flavor::Desktop => "desktop",
            Flavor::Windows => "windows",
        }
    }

    /// File name used when no explicit output path is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Flavor::Mobile => "SubZ.yml",
            Flavor::Desktop | Flavor::Windows => "Sub-Win.yml",
        }
    }

    pub fn profile(&self) -> &'static FlavorProfile {
        match self {
            Flavor::Mobile => &MOBILE_PROFILE,
            Flavor::Desktop => &DESKTOP_PROFILE,
            Flavor::Windows => &WINDOWS_PROFILE,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listening ports exposed by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenPorts {
    /// Separate HTTP and SOCKS listeners
    Split { port: u16, socks_port: u16 },
    /// One mixed HTTP/SOCKS listener
    Mixed(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsProfile {
    pub enable: bool,
    pub enhanced_mode: &'static str,
    pub fake_ip_range: &'static str,
    pub nameserver: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunProfile {
    pub enable: bool,
    pub stack: &'static str,
    pub dns_hijack: &'static [&'static str],
    pub auto_route: bool,
    pub auto_detect_interface: bool,
    pub fallback: &'static [&'static str],
}

/// Everything about a target document that does not depend on the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorProfile {
    pub ports: ListenPorts,
    pub allow_lan: bool,
    pub mode: &'static str,
    pub log_level: &'static str,
    pub external_controller: &'static str,
    pub dns: DnsProfile,
    pub tun: TunProfile,
    /// Whether `proxy-groups` and `rules` are generated
    pub group_routing: bool,
}
