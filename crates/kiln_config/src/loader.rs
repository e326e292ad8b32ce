//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::KilnConfig;
use std::path::Path;

/// File name looked up when no explicit configuration path is given.
pub const CONFIG_FILE_NAME: &str = "kiln.toml";

/// Loads and validates a configuration from an explicit file path.
pub fn load_config(path: &Path) -> Result<KilnConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Looks for `kiln.toml` in a directory and loads it if present.
///
/// Returns `Ok(None)` when the file does not exist; other failures are
/// reported as errors.
pub fn discover_config(dir: &Path) -> Result<Option<KilnConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    load_config(&path).map(Some)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<KilnConfig, ConfigError> {
    let config: KilnConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks the ranges of every value that is decidable without a netlist.
fn validate_config(config: &KilnConfig) -> Result<(), ConfigError> {
    let place = &config.place;
    if place.iterations == Some(0) {
        return Err(ConfigError::ValidationError(
            "place.iterations must be at least 1".to_string(),
        ));
    }
    if place.restarts == Some(0) {
        return Err(ConfigError::ValidationError(
            "place.restarts must be at least 1".to_string(),
        ));
    }
    if let Some(t) = place.initial_temperature {
        if !t.is_finite() || t <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "place.initial-temperature {t} must be positive and finite"
            )));
        }
    }
    if let Some(a) = place.cooling {
        if !(a > 0.0 && a < 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "place.cooling {a} must lie strictly between 0 and 1"
            )));
        }
    }
    if place.grid_dim == Some(0) {
        return Err(ConfigError::ValidationError(
            "place.grid-dim must be at least 1".to_string(),
        ));
    }
    if let Some(w) = place.cell_width {
        if w <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "place.cell-width {w} is not positive"
            )));
        }
    }
    if let Some(h) = place.cell_height {
        if h <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "place.cell-height {h} is not positive"
            )));
        }
    }
    Ok(())
}
