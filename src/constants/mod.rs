//! Process-wide immutable configuration data.
//!
//! Every literal that ends up in a generated profile lives here so the
//! flavors stay consistent and easy to diff against each other.

pub mod groups;
pub mod profiles;
pub mod rules;

pub use groups::*;
pub use profiles::{DESKTOP_PROFILE, MOBILE_PROFILE, WINDOWS_PROFILE};
pub use rules::{RuleTarget, RULE_TABLE};
