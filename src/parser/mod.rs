pub mod yaml;

pub use yaml::clash::{extract_proxies, load_clash_config, parse_clash_config};
