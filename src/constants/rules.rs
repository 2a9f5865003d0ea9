//! Fixed routing rule table.

/// Where a rule sends matching traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    Reject,
    Direct,
    /// The flavor's primary selector group
    PrimaryGroup,
}

/// Rule matchers in evaluation order, each paired with its target.
pub const RULE_TABLE: &[(&str, RuleTarget)] = &[
    ("DOMAIN-SUFFIX,ad.com", RuleTarget::Reject),
    ("GEOIP,IR", RuleTarget::Direct),
    ("MATCH", RuleTarget::PrimaryGroup),
    ("IP-CIDR,8.8.8.8/32", RuleTarget::PrimaryGroup),
    ("IP-CIDR,8.8.4.4/32", RuleTarget::PrimaryGroup),
    ("IP-CIDR,1.1.1.1/32", RuleTarget::PrimaryGroup),
    ("IP-CIDR,1.0.0.1/32", RuleTarget::PrimaryGroup),
    ("SRC-IP-CIDR,192.168.1.201/32", RuleTarget::Direct),
    ("IP-CIDR,10.0.0.0/8", RuleTarget::Direct),
    ("IP-CIDR,172.16.0.0/12", RuleTarget::Direct),
    ("IP-CIDR,127.0.0.0/8", RuleTarget::Direct),
    ("IP-CIDR,192.168.0.0/16", RuleTarget::Direct),
];
