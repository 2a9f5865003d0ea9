//! Generate client-specific Clash profiles from a single source profile.
//!
//! The source's `proxies` list is validated and passed through unchanged,
//! while networking, DNS, tunnel, proxy-group and rule sections come from a
//! fixed per-flavor template.

pub mod constants;
pub mod error;
pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod utils;

pub use error::{ConvertError, Result};
pub use interfaces::{convert, ConvertReport, ConvertRequest, ConvertRequestBuilder};
pub use models::{Flavor, ProxyList};
