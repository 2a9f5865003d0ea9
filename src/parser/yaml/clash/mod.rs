mod loader;
mod proxies;

pub use loader::{load_clash_config, parse_clash_config};
pub use proxies::{collect_proxies, extract_proxies, proxy_name};
