pub mod config;
pub mod yaml;

// Re-export format converters
pub use config::formats::clash::{build_clash_output, proxy_to_clash};
pub use config::group::group_generate;
pub use config::ruleconvert::{render_rules, CLASH_RULES};
pub use yaml::ClashYamlOutput;
