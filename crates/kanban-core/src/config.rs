use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the board data file.
pub const DATA_FILE_ENV: &str = "KANBAN_FILE";

/// Environment variable enabling the debug log file.
pub const DEBUG_LOG_ENV: &str = "KANBAN_DEBUG_LOG";

const DEFAULT_DATA_FILE_NAME: &str = "board.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Location of the durable board slot.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// When set, DEBUG level logs are appended to this file.
    #[serde(default)]
    pub debug_log: Option<PathBuf>,
}

impl EngineConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, then apply environment overrides.
    /// A missing or unreadable config file yields the defaults.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring invalid config at {}: {}", path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    fn apply_env_overrides(&mut self) {
        if let Some(file) = std::env::var_os(DATA_FILE_ENV).filter(|v| !v.is_empty()) {
            self.data_file = Some(PathBuf::from(file));
        }
        if let Some(log) = std::env::var_os(DEBUG_LOG_ENV).filter(|v| !v.is_empty()) {
            self.debug_log = Some(PathBuf::from(log));
        }
    }

    pub fn default_data_file() -> Option<PathBuf> {
        dirs::data_dir().map(|data| data.join("kanban").join(DEFAULT_DATA_FILE_NAME))
    }

    /// The configured data file, falling back to the platform data directory
    /// and finally to the working directory.
    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .or_else(Self::default_data_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE_NAME))
    }
}
