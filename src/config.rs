use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VerseGraphError};

/// Configuration for the study graph engine.
///
/// Holds the default caps and limits applied to queries when a caller does
/// not supply an explicit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Maximum number of candidates returned by ranked name lookups.
    pub match_limit: usize,
    /// Generation cap for ancestor/descendant walks when none is given.
    pub default_generations: u32,
    /// Depth cap for relationship path search when none is given.
    pub default_path_depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: 1,
            match_limit: 10,
            default_generations: 5,
            default_path_depth: 10,
        }
    }
}

/// Loads the configuration from the given file.
///
/// If the file does not exist, returns the default configuration.
pub fn load_config(config_path: &Path) -> Result<EngineConfig> {
    if !config_path.exists() {
        return Ok(EngineConfig::default());
    }

    let contents = fs::read_to_string(config_path).map_err(|e| VerseGraphError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: EngineConfig =
        serde_json::from_str(&contents).map_err(|e| VerseGraphError::Config {
            message: format!(
                "failed to parse config file '{}': {}",
                config_path.display(),
                e
            ),
        })?;

    Ok(config)
}

/// Saves the configuration to the given file using an atomic write.
///
/// Writes to a temporary file first and then renames it to the final
/// location, ensuring that a partial write never corrupts the configuration.
pub fn save_config(config_path: &Path, config: &EngineConfig) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| VerseGraphError::Config {
            message: format!(
                "failed to create config directory '{}': {}",
                parent.display(),
                e
            ),
        })?;
    }

    let tmp_path = config_path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| VerseGraphError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| VerseGraphError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, config_path).map_err(|e| VerseGraphError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            config_path.display(),
            e
        ),
    })?;

    Ok(())
}
