//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::corpus::bucketing::DISTANCE_THRESHOLDS;
use crate::synthesis::timing::TimingConfig;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Ingestion/cleaning settings
    pub ingest: IngestConfig,
    /// Timing model settings
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Ingestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Ascending distance thresholds (pixels) the recorder bucketed by
    pub thresholds: Vec<u32>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            thresholds: DISTANCE_THRESHOLDS.to_vec(),
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.ingest.thresholds.is_empty() {
            return Err(crate::Error::Config("thresholds must not be empty".to_string()));
        }
        if !self.ingest.thresholds.windows(2).all(|w| w[0] < w[1]) {
            return Err(crate::Error::Config(format!(
                "thresholds must be strictly ascending, got {:?}",
                self.ingest.thresholds
            )));
        }
        for (name, range) in [
            ("fast", self.timing.fast),
            ("medium", self.timing.medium),
            ("slow", self.timing.slow),
        ] {
            if range.min <= 0.0 || range.max < range.min {
                return Err(crate::Error::Config(format!(
                    "{name} speed range must satisfy 0 < min <= max, got [{}, {}]",
                    range.min, range.max
                )));
            }
        }
        if !(0.0..1.0).contains(&self.timing.speed_variance) {
            return Err(crate::Error::Config(format!(
                "speed_variance must be in [0, 1), got {}",
                self.timing.speed_variance
            )));
        }
        if self.timing.short_max <= 0.0 || self.timing.medium_max <= self.timing.short_max {
            return Err(crate::Error::Config(format!(
                "category cutoffs must satisfy 0 < short_max < medium_max, got {} and {}",
                self.timing.short_max, self.timing.medium_max
            )));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".cursor_weaver").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
