use crate::models::{DnsProfile, FlavorProfile, ListenPorts, TunProfile};

const TUN: TunProfile = TunProfile {
    enable: true,
    stack: "gvisor",
    dns_hijack: &["198.18.0.2:53"],
    auto_route: true,
    auto_detect_interface: true,
    fallback: &["94.140.14.14", "94.140.14.15"],
};

pub static MOBILE_PROFILE: FlavorProfile = FlavorProfile {
    ports: ListenPorts::Split {
        port: 7890,
        socks_port: 7891,
    },
    allow_lan: false,
    mode: "Global",
    log_level: "silent",
    external_controller: "127.0.0.1:9090",
    dns: DnsProfile {
        enable: true,
        enhanced_mode: "redir-host",
        fake_ip_range: "198.18.0.1/16",
        nameserver: &["94.140.14.14", "94.140.15.15"],
    },
    tun: TUN,
    group_routing: false,
};

pub static DESKTOP_PROFILE: FlavorProfile = FlavorProfile {
    ports: ListenPorts::Mixed(7890),
    allow_lan: false,
    mode: "Global",
    log_level: "silent",
    external_controller: "127.0.0.1:9090",
    dns: DnsProfile {
        enable: true,
        enhanced_mode: "redir-host",
        fake_ip_range: "198.18.0.1/16",
        nameserver: &["94.140.14.14", "94.140.15.15"],
    },
    tun: TUN,
    group_routing: true,
};

// The stand-alone Windows profile has always shipped the secondary DNS
// resolver as 94.140.14.15; keep it distinct from the desktop profile.
pub static WINDOWS_PROFILE: FlavorProfile = FlavorProfile {
    ports: ListenPorts::Mixed(7890),
    allow_lan: false,
    mode: "Global",
    log_level: "silent",
    external_controller: "127.0.0.1:9090",
    dns: DnsProfile {
        enable: true,
        enhanced_mode: "redir-host",
        fake_ip_range: "198.18.0.1/16",
        nameserver: &["94.140.14.14", "94.140.14.15"],
    },
    tun: TUN,
    group_routing: true,
};
