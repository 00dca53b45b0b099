use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILENAME: &str = ".taskline.toml";
const DEFAULT_DATA_FILE: &str = "data/taskline.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasklineConfig {
    /// Task file path; relative values resolve against the working
    /// directory.
    pub data_file: Option<String>,
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILENAME)
}

pub fn load_config(root: &Path) -> Option<TasklineConfig> {
    let path = config_path(root);
    if !path.is_file() {
        return None;
    }
    let text = fs::read_to_string(&path).ok()?;
    toml::from_str::<TasklineConfig>(&text).ok()
}

pub fn write_config(root: &Path, config: &TasklineConfig) -> Result<PathBuf, ConfigError> {
    let path = config_path(root);
    let body = toml::to_string_pretty(config)?;
    fs::write(&path, body)?;
    Ok(path)
}

/// Resolves the task file path: an explicit path wins, then the config
/// file, then the built-in default. Relative paths resolve against `root`.
pub fn resolve_data_file(root: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return rooted(root, path);
    }
    if let Some(value) = load_config(root).and_then(|config| config.data_file) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return rooted(root, Path::new(trimmed));
        }
    }
    root.join(DEFAULT_DATA_FILE)
}

fn rooted(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
