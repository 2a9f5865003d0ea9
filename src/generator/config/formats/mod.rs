pub mod clash;

pub use clash::{build_clash_output, proxy_to_clash};
