//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the
//! application, separated from the logic that operates on them.
//!
//! ```rust
//! use clashgen::models::Flavor;
//!
//! let flavor = Flavor::Windows;
//! assert!(flavor.profile().group_routing);
//! assert_eq!(flavor.default_file_name(), "Sub-Win.yml");
//! ```

mod profile;
mod proxy_group_config;
mod proxy_list;

pub use profile::*;
pub use proxy_group_config::*;
pub use proxy_list::ProxyList;
