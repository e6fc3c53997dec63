//! Configuration loader.

use std::fs;
use std::path::Path;

use super::schema::{CensusConfig, ConfigError};

/// Load configuration from a JSON file.
///
/// Reads, parses and validates the file in one step; any failure carries
/// the offending path or field in the error.
pub fn load_config(path: &Path) -> Result<CensusConfig, ConfigError> {
    let config_content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: CensusConfig = serde_json::from_str(&config_content)?;

    config.validate()?;

    Ok(config)
}
