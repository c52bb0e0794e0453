use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::portfolio::PortfolioConfig;
use crate::profile::validation::validate_profile;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read profile file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a profile document. Validation issues are logged, never fatal.
pub fn parse_profile(raw: &str) -> Result<PortfolioConfig, LoadError> {
    let config: PortfolioConfig = serde_json::from_str(raw)?;

    for issue in validate_profile(&config) {
        warn!("Profile issue at {}: {}", issue.field, issue.message);
    }

    Ok(config)
}

/// Reads and parses the profile document at `path`.
pub fn load_profile(path: impl AsRef<Path>) -> Result<PortfolioConfig, LoadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let config = parse_profile(&raw)?;
    info!(
        "Loaded profile for {} ({} projects, {} experience entries)",
        config.personal.name,
        config.projects.len(),
        config.experience.len()
    );
    Ok(config)
}
