//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory where gesture libraries are stored.
    pub data_dir: PathBuf,

    /// Default recognizer parameters.
    pub recognizer: RecognizerDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default recognizer parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerDefaults {
    /// Number of points every stroke is reduced to before comparison.
    /// Higher values improve accuracy at the cost of comparison time.
    pub resolution: usize,

    /// Target bounding-box extent after normalization.
    pub norm_size: f64,

    /// Minimum stroke width below which the x axis is left unscaled.
    pub min_width: f64,

    /// Minimum stroke height below which the y axis is left unscaled.
    pub min_height: f64,

    /// Keep every Nth raw capture sample when recording a stroke.
    pub capture_decimation: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "scrawl=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs_default_data(),
            recognizer: RecognizerDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for RecognizerDefaults {
    fn default() -> Self {
        Self {
            resolution: 10,
            norm_size: 200.0,
            min_width: 30.0,
            min_height: 30.0,
            capture_decimation: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }

    /// Path of the bundled default gesture library within the data directory.
    pub fn default_library_path(&self) -> PathBuf {
        self.data_dir.join("default-gestures.jsonl")
    }

    /// Path of the user's custom gesture library within the data directory.
    pub fn custom_library_path(&self) -> PathBuf {
        self.data_dir.join("custom-gestures.jsonl")
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("scrawl").join("config.json")
}

/// Default data directory for gesture libraries.
fn dirs_default_data() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("scrawl")
}
