pub mod clash_output;

pub use clash_output::{ClashDns, ClashProxyGroup, ClashTun, ClashYamlOutput};
