//! JSON loading of analyzer parameters.

use crate::analyzer::AnalyzerParams;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Loads [`AnalyzerParams`] from a JSON file. Missing fields fall back to
/// their defaults, so a partial config tuning only the area band is valid.
pub fn load_params(path: &Path) -> Result<AnalyzerParams, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let params: AnalyzerParams =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(params)
}
