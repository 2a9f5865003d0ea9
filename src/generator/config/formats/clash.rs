use log::debug;

use crate::error::Result;
use crate::generator::config::group::group_generate;
use crate::generator::config::ruleconvert::CLASH_RULES;
use crate::generator::yaml::{ClashProxyGroup, ClashYamlOutput};
use crate::models::{Flavor, ProxyList};

/// Build the target document of `flavor` for a filtered proxy list
///
/// The flavor's fixed template is copied, the proxy entries are inserted
/// verbatim and, for group-routed flavors, `proxy-groups` and `rules` are
/// derived from the proxy names.
pub fn build_clash_output(flavor: Flavor, proxies: &ProxyList) -> ClashYamlOutput {
    let profile = flavor.profile();
    let mut output = ClashYamlOutput::from_profile(profile);
    output.proxies = proxies.entries.clone();

    if profile.group_routing {
        output.proxy_groups = group_generate(&proxies.names)
            .iter()
            .map(ClashProxyGroup::from)
            .collect();
        output.rules = CLASH_RULES.to_vec();
    }

    debug!(
        "Built {} profile: {} proxies, {} groups, {} rules",
        flavor,
        output.proxies.len(),
        output.proxy_groups.len(),
        output.rules.len()
    );
    output
}

/// Convert proxies to a serialized Clash profile of the given flavor
///
/// Keys keep their template order, Unicode is written unescaped and the
/// output is plain block-style YAML without tags.
pub fn proxy_to_clash(flavor: Flavor, proxies: &ProxyList) -> Result<String> {
    let output = build_clash_output(flavor, proxies);
    Ok(serde_yaml::to_string(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AUTO_GROUP, PRIMARY_GROUP, SELECT_GROUP};
    use crate::parser::{extract_proxies, parse_clash_config};
    use serde_yaml::Value;
    use std::path::Path;

    const SOURCE: &str = r#"
proxies:
  - name: "🇭🇰 HK 01"
    type: ss
    server: hk.example.com
    port: 8388
    cipher: aes-256-gcm
    password: secret
  - not a proxy
  - name: "JP 02"
    type: trojan
    server: jp.example.com
    port: 443
    password: secret
    sni: jp.example.com
"#;

    fn source_proxies() -> ProxyList {
        let config = parse_clash_config(SOURCE, Path::new("source.yaml")).unwrap();
        extract_proxies(&config).unwrap()
    }

    fn top_level_keys(yaml: &str) -> Vec<String> {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        value
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_mobile_profile_shape() {
        let yaml = proxy_to_clash(Flavor::Mobile, &source_proxies()).unwrap();
        assert_eq!(
            top_level_keys(&yaml),
            vec![
                "port",
                "socks-port",
                "allow-lan",
                "mode",
                "log-level",
                "external-controller",
                "dns",
                "tun",
                "proxies"
            ]
        );
    }

    #[test]
    fn test_group_profile_shape() {
        let yaml = proxy_to_clash(Flavor::Desktop, &source_proxies()).unwrap();
        assert_eq!(
            top_level_keys(&yaml),
            vec![
                "mixed-port",
                "allow-lan",
                "mode",
                "log-level",
                "external-controller",
                "dns",
                "tun",
                "proxies",
                "proxy-groups",
                "rules"
            ]
        );
    }

    #[test]
    fn test_groups_reference_filtered_names() {
        let proxies = source_proxies();
        let output = build_clash_output(Flavor::Windows, &proxies);
        let expected = vec!["🇭🇰 HK 01".to_string(), "JP 02".to_string()];

        assert_eq!(output.proxy_groups.len(), 4);
        assert_eq!(
            output.proxy_groups[0].proxies,
            vec![AUTO_GROUP.to_string(), SELECT_GROUP.to_string()]
        );
        for group in &output.proxy_groups[1..] {
            assert_eq!(group.proxies, expected);
        }
        assert_eq!(output.rules[2], format!("MATCH,{}", PRIMARY_GROUP));
    }

    #[test]
    fn test_nameserver_drift_between_profiles() {
        let proxies = source_proxies();
        let desktop = build_clash_output(Flavor::Desktop, &proxies);
        let windows = build_clash_output(Flavor::Windows, &proxies);
        assert_eq!(desktop.dns.nameserver, vec!["94.140.14.14", "94.140.15.15"]);
        assert_eq!(windows.dns.nameserver, vec!["94.140.14.14", "94.140.14.15"]);
        assert_eq!(desktop.tun, windows.tun);
        assert_eq!(desktop.proxy_groups, windows.proxy_groups);
    }

    #[test]
    fn test_unicode_written_unescaped() {
        let yaml = proxy_to_clash(Flavor::Desktop, &source_proxies()).unwrap();
        assert!(yaml.contains("🇭🇰 HK 01"));
        assert!(yaml.contains(PRIMARY_GROUP));
        assert!(yaml.contains(AUTO_GROUP));
        assert!(!yaml.contains("\\U"));
        assert!(!yaml.contains('!'));
    }

    #[test]
    fn test_round_trip_names_match_groups() {
        let yaml = proxy_to_clash(Flavor::Desktop, &source_proxies()).unwrap();
        let reparsed = parse_clash_config(&yaml, Path::new("Sub-Win.yml")).unwrap();
        let names = extract_proxies(&reparsed).unwrap().names;

        let output: ClashYamlOutput = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(output.proxy_groups[1].proxies, names);
        assert_eq!(output.proxies, source_proxies().entries);
    }
}
