use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a conversion run.
///
/// None of these are retried; the binary reports the message and exits.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No source file path provided.")]
    InputMissing,

    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{0}")]
    Structure(String),

    #[error("No usable proxies were found in the source config.")]
    EmptyResult,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize profile: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
