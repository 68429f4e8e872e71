//! Configuration file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::MappingSource;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "PINSCRIPT_CONFIG";

/// pinscript settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PinConfig {
    /// Language used when a request or prompt does not name one
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Where language tables come from
    #[serde(default)]
    pub mapping_source: MappingSource,
    /// Directory of `<language>.json` tables for `mapping_source = "files"`
    #[serde(default = "default_mapping_dir")]
    pub mapping_dir: PathBuf,
    /// Address the web endpoint binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_language() -> String {
    "odia".to_string()
}

fn default_mapping_dir() -> PathBuf {
    PathBuf::from("data/mappings")
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            mapping_source: MappingSource::default(),
            mapping_dir: default_mapping_dir(),
            listen_addr: default_listen_addr(),
        }
    }
}

/// Config path: `$PINSCRIPT_CONFIG`, else ~/.config/pinscript/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("pinscript").join("config.json")
}

/// Load config from `path` (defaults if missing or unparsable)
pub fn load_config_from(path: &Path) -> PinConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring invalid config {}: {}", path.display(), e);
            PinConfig::default()
        }),
        Err(_) => PinConfig::default(),
    }
}

/// Save config to `path`
pub fn save_config(config: &PinConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("failed to create config dir: {}", e))?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| format!("failed to serialize: {}", e))?;
    fs::write(path, json).map_err(|e| format!("failed to write config: {}", e))?;
    Ok(())
}
