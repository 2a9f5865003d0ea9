use once_cell::sync::Lazy;

use crate::constants::{RuleTarget, PRIMARY_GROUP, RULE_TABLE};

/// Rules of every group-routed profile, rendered once per process
pub static CLASH_RULES: Lazy<Vec<String>> = Lazy::new(|| render_rules(PRIMARY_GROUP));

/// Render the fixed rule table into Clash rule lines
///
/// `primary_group` is the policy for rules that target the selector group.
pub fn render_rules(primary_group: &str) -> Vec<String> {
    RULE_TABLE
        .iter()
        .map(|(matcher, target)| {
            let policy = match target {
                RuleTarget::Reject => "REJECT",
                RuleTarget::Direct => "DIRECT",
                RuleTarget::PrimaryGroup => primary_group,
            };
            format!("{},{}", matcher, policy)
        })
        .collect()
}
