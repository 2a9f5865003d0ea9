//! Group generation utilities
//!
//! This module provides functionality for generating the fixed proxy groups
//! of the Sub-Win profiles.

use crate::constants::{
    AUTO_GROUP, FALLBACK_GROUP, PRIMARY_GROUP, SELECT_GROUP, TEST_INTERVAL, TEST_URL,
};
use crate::models::{ProxyGroupConfig, ProxyGroupConfigs, ProxyGroupType};

/// Generates the proxy groups for a list of proxy names
///
/// # Arguments
///
/// * `names` - Proxy names in source order
///
/// # Returns
///
/// The primary selector (pointing at the automatic and manual groups), the
/// manual selector, the latency test group and the fallback group. The last
/// three list every name in `names`, in the same order.
pub fn group_generate(names: &[String]) -> ProxyGroupConfigs {
    vec![
        ProxyGroupConfig::new(PRIMARY_GROUP, ProxyGroupType::Select)
            .with_proxies(vec![AUTO_GROUP.to_string(), SELECT_GROUP.to_string()]),
        ProxyGroupConfig::new(SELECT_GROUP, ProxyGroupType::Select).with_proxies(names.to_vec()),
        ProxyGroupConfig::new(AUTO_GROUP, ProxyGroupType::URLTest)
            .with_proxies(names.to_vec())
            .with_health_check(TEST_URL, TEST_INTERVAL),
        ProxyGroupConfig::new(FALLBACK_GROUP, ProxyGroupType::Fallback)
            .with_proxies(names.to_vec())
            .with_health_check(TEST_URL, TEST_INTERVAL),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_primary_group_lists_only_groups() {
        let groups = group_generate(&names(&["HK 01", "JP 02"]));
        assert_eq!(groups[0].name, PRIMARY_GROUP);
        assert_eq!(groups[0].group_type, ProxyGroupType::Select);
        assert_eq!(groups[0].proxies, names(&[AUTO_GROUP, SELECT_GROUP]));
    }

    #[test]
    fn test_member_groups_follow_proxy_order() {
        let proxy_names = names(&["Z", "A", "M"]);
        let groups = group_generate(&proxy_names);
        assert_eq!(groups.len(), 4);
        for group in &groups[1..] {
            assert_eq!(group.proxies, proxy_names);
        }
        assert_eq!(groups[1].type_str(), "select");
        assert_eq!(groups[2].type_str(), "url-test");
        assert_eq!(groups[3].type_str(), "fallback");
        assert_eq!(groups[2].url, TEST_URL);
        assert_eq!(groups[3].interval, 300);
    }
}
