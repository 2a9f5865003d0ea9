use log::{debug, warn};
use serde_yaml::{Mapping, Value};

use crate::error::{ConvertError, Result};
use crate::models::ProxyList;
use crate::utils::yaml::kind_name;

/// Name of a usable proxy entry, or `None` if the entry is malformed.
///
/// An entry is usable when it is a mapping whose `name` is a string that is
/// not blank. The name is returned exactly as written.
pub fn proxy_name(entry: &Value) -> Option<&str> {
    let name = entry.as_mapping()?.get("name")?.as_str()?;
    if name.trim().is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Keep the well-formed entries of a `proxies` sequence, preserving order
pub fn collect_proxies(entries: &[Value]) -> Result<ProxyList> {
    let mut list = ProxyList::default();

    for entry in entries {
        match proxy_name(entry) {
            Some(name) => {
                let name = name.to_string();
                list.push(entry.clone(), name);
            }
            None => {
                debug!("Skipping malformed proxy entry ({})", kind_name(entry));
                list.skipped += 1;
            }
        }
    }

    if list.is_empty() {
        return Err(ConvertError::EmptyResult);
    }
    if list.skipped > 0 {
        warn!("Skipped {} malformed proxy entries.", list.skipped);
    }
    Ok(list)
}

/// Pull the usable proxies out of a parsed source profile
pub fn extract_proxies(config: &Mapping) -> Result<ProxyList> {
    match config.get("proxies") {
        Some(Value::Sequence(entries)) => collect_proxies(entries),
        Some(other) => Err(ConvertError::Structure(format!(
            "The source config must contain a 'proxies' list (found {}).",
            kind_name(other)
        ))),
        None => Err(ConvertError::Structure(
            "The source config must contain a 'proxies' list.".to_string(),
        )),
    }
}
