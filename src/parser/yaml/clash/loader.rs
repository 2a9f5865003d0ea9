use std::path::Path;

use log::debug;
use serde_yaml::{Mapping, Value};

use crate::error::{ConvertError, Result};
use crate::utils::file::read_text_lossy;
use crate::utils::yaml::{from_str_relaxed, kind_name};

/// Parse the text of a Clash profile into its top-level mapping.
///
/// `path` only names the document in error messages. Unknown tags are
/// accepted and replaced by their plain values.
pub fn parse_clash_config(content: &str, path: &Path) -> Result<Mapping> {
    let value = from_str_relaxed(content).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Mapping(map) => Ok(map),
        other => Err(ConvertError::Structure(format!(
            "{} does not contain a valid Clash mapping (found {}).",
            path.display(),
            kind_name(&other)
        ))),
    }
}

/// Read and parse a Clash profile from disk
pub fn load_clash_config(path: &Path) -> Result<Mapping> {
    let content = read_text_lossy(path)?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    parse_clash_config(&content, path)
}
