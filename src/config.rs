//! Viewer configuration
//!
//! Read from a RON file next to the executable (default `scrapbook.ron`).
//! Every field has a default, so a partial file works and a missing file
//! means "all defaults".

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::book::{FlipConfig, MAX_PAGE_COUNT};

pub const DEFAULT_CONFIG_PATH: &str = "scrapbook.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Pages between the covers
    pub page_count: usize,
    /// Fraction of the remaining angle a hinge covers per frame
    pub flip_speed: f32,
    /// Hinges snap onto their target inside this distance (radians)
    pub snap_epsilon: f32,
    /// How far open (radians) the back cover must be before "previous" closes it again
    pub back_cover_reopen_threshold: f32,
    /// Show a plain paper book before any photos are chosen
    pub show_without_photos: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let flip = FlipConfig::default();
        Self {
            page_count: flip.page_count,
            flip_speed: flip.speed,
            snap_epsilon: flip.epsilon,
            back_cover_reopen_threshold: flip.reopen_threshold,
            show_without_photos: false,
        }
    }
}

impl ViewerConfig {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load `path`, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                println!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                println!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_count == 0 {
            return Err(ConfigError::ValidationError("page_count must be at least 1".to_string()));
        }
        if self.page_count > MAX_PAGE_COUNT {
            return Err(ConfigError::ValidationError(format!(
                "page_count must be at most {}, got {}",
                MAX_PAGE_COUNT, self.page_count
            )));
        }
        if !(self.flip_speed > 0.0 && self.flip_speed <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "flip_speed must be in (0, 1], got {}",
                self.flip_speed
            )));
        }
        if !(self.snap_epsilon > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "snap_epsilon must be positive, got {}",
                self.snap_epsilon
            )));
        }
        if !(self.back_cover_reopen_threshold >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "back_cover_reopen_threshold must not be negative, got {}",
                self.back_cover_reopen_threshold
            )));
        }
        Ok(())
    }

    pub fn flip_config(&self) -> FlipConfig {
        FlipConfig {
            page_count: self.page_count,
            speed: self.flip_speed,
            epsilon: self.snap_epsilon,
            reopen_threshold: self.back_cover_reopen_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_flip_defaults() {
        assert_eq!(ViewerConfig::default().flip_config(), FlipConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = ViewerConfig::from_ron("(page_count: 4, flip_speed: 0.09)").unwrap();
        assert_eq!(config.page_count, 4);
        assert_eq!(config.flip_speed, 0.09);
        assert_eq!(config.snap_epsilon, 0.01);
        assert!(!config.show_without_photos);
    }

    #[test]
    fn test_rejects_zero_pages() {
        let err = ViewerConfig::from_ron("(page_count: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_huge_page_count() {
        let err = ViewerConfig::from_ron("(page_count: 4611686018427387904)").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(ViewerConfig::from_ron(&format!("(page_count: {})", MAX_PAGE_COUNT + 1)).is_err());
        assert!(ViewerConfig::from_ron(&format!("(page_count: {})", MAX_PAGE_COUNT)).is_ok());
    }

    #[test]
    fn test_rejects_bad_speed() {
        assert!(ViewerConfig::from_ron("(flip_speed: 0.0)").is_err());
        assert!(ViewerConfig::from_ron("(flip_speed: 1.5)").is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = ViewerConfig::from_ron("(page_count: \"ten\")").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scrapbook.ron");
        fs::write(&path, "(\n    page_count: 6,\n    show_without_photos: true,\n)\n").unwrap();
        let expected = ViewerConfig {
            page_count: 6,
            show_without_photos: true,
            ..ViewerConfig::default()
        };
        assert_eq!(ViewerConfig::load(&path).unwrap(), expected);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ViewerConfig::load_or_default(&dir.path().join("absent.ron"));
        assert_eq!(config, ViewerConfig::default());
    }
}
