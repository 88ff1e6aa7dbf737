//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::TutorcastResult;

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Annotation parsing defaults.
    #[serde(default)]
    pub annotations: AnnotationDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied when parsing annotation scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationDefaults {
    /// Frames per second used to convert timestamps to frame offsets.
    pub fps: u32,

    /// On-screen duration (frames) handed to the renderer for bounded overlays.
    pub display_frames: u32,

    /// Treat range-validation issues as fatal.
    pub strict: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "tutorcast=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AnnotationDefaults {
    fn default() -> Self {
        Self {
            fps: 30,
            display_frames: 60,
            strict: false,
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
        Self::load_from(&config_file_path())
    }

    /// Load config from an explicit path, falling back to defaults.
    pub fn load_from(config_path: &std::path::Path) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
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
    pub fn save(&self) -> TutorcastResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, config_path: &std::path::Path) -> TutorcastResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("tutorcast").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.annotations.fps, 30);
        assert_eq!(config.annotations.display_frames, 60);
        assert!(!config.annotations.strict);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"annotations":{"fps":60}}"#).unwrap();
        assert_eq!(config.annotations.fps, 60);
        assert_eq!(config.annotations.display_frames, 60);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir()
            .join("tutorcast_test_config")
            .join("config.json");
        let _ = std::fs::remove_file(&path);

        let mut config = AppConfig::default();
        config.annotations.fps = 24;
        config.annotations.strict = true;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.annotations.fps, 24);
        assert!(loaded.annotations.strict);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_over_a_directory_is_an_io_error() {
        let dir = std::env::temp_dir().join("tutorcast_config_is_a_dir");
        std::fs::create_dir_all(&dir).unwrap();

        let err = AppConfig::default().save_to(&dir).unwrap_err();
        assert!(matches!(err, crate::TutorcastError::Io(_)));

        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("tutorcast_bad_config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.annotations.fps, 30);

        std::fs::remove_file(&path).ok();
    }
}
