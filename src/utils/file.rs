use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{ConvertError, Result};

const BOM: char = '\u{feff}';

/// Checks if a regular file exists at the given path
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Decode bytes as UTF-8, dropping invalid sequences instead of failing.
///
/// Returns the text and whether anything had to be dropped.
pub fn decode_utf8_lossy(bytes: &[u8]) -> (String, bool) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), false),
        Err(_) => {
            let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
            (text, true)
        }
    }
}

/// Read a text file, falling back to lossy decoding on invalid UTF-8
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, lossy) = decode_utf8_lossy(&bytes);
    if lossy {
        warn!(
            "{} is not valid UTF-8, invalid byte sequences were ignored",
            path.display()
        );
    }
    Ok(text.trim_start_matches(BOM).to_string())
}

/// Write `content` to `path`, creating missing parent directories first
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating directory {}", parent.display());
        }
        fs::create_dir_all(parent).map_err(|source| ConvertError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}
