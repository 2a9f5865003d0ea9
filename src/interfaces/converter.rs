use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{ConvertError, Result};
use crate::generator::proxy_to_clash;
use crate::models::Flavor;
use crate::parser::{extract_proxies, load_clash_config};
use crate::utils::file::{file_exists, write_file};

/// One profile to generate and where to write it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub flavor: Flavor,
    pub path: PathBuf,
}

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Source Clash profile
    pub source: PathBuf,
    /// Profiles to generate, written in this order
    pub outputs: Vec<OutputTarget>,
}

/// Builder for ConvertRequest
#[derive(Debug, Clone)]
pub struct ConvertRequestBuilder {
    request: ConvertRequest,
}

impl ConvertRequestBuilder {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        ConvertRequestBuilder {
            request: ConvertRequest {
                source: source.into(),
                outputs: Vec::new(),
            },
        }
    }

    /// Add a profile written to an explicit path
    pub fn output(mut self, flavor: Flavor, path: impl Into<PathBuf>) -> Self {
        self.request.outputs.push(OutputTarget {
            flavor,
            path: path.into(),
        });
        self
    }

    /// Add a profile written to `dir` under the flavor's default file name
    pub fn output_in(self, flavor: Flavor, dir: &Path) -> Self {
        self.output(flavor, dir.join(flavor.default_file_name()))
    }

    pub fn build(self) -> ConvertRequest {
        self.request
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub source: PathBuf,
    pub written: Vec<PathBuf>,
    pub proxy_count: usize,
    pub skipped: usize,
}

impl ConvertReport {
    /// One-line summary for the user
    pub fn summary(&self) -> String {
        let written = self
            .written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" and ");
        let source_name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());
        format!(
            "Generated {} with {} proxies based on {}.",
            written, self.proxy_count, source_name
        )
    }
}

/// Run a conversion: load the source once, then build and write every
/// requested profile in order.
///
/// Nothing is written unless the source yields at least one usable proxy.
/// A failure while writing a later profile leaves earlier files in place.
pub fn convert(request: &ConvertRequest) -> Result<ConvertReport> {
    if !file_exists(&request.source) {
        return Err(ConvertError::SourceNotFound(request.source.clone()));
    }

    info!("Loading {}", request.source.display());
    let config = load_clash_config(&request.source)?;
    let proxies = extract_proxies(&config)?;
    debug!(
        "{} usable proxies, {} skipped",
        proxies.len(),
        proxies.skipped
    );

    let mut written = Vec::with_capacity(request.outputs.len());
    for target in &request.outputs {
        let content = proxy_to_clash(target.flavor, &proxies)?;
        write_file(&target.path, &content)?;
        info!("Wrote {} profile to {}", target.flavor, target.path.display());
        written.push(target.path.clone());
    }

    Ok(ConvertReport {
        source: request.source.clone(),
        written,
        proxy_count: proxies.len(),
        skipped: proxies.skipped,
    })
}
