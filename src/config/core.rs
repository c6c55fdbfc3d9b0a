use crate::config::chunksys::ChunkSysConfig;
use crate::config::worldgen::WorldGenConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config encode failed: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub worldgen: WorldGenConfig,
    pub chunks: ChunkSysConfig,
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// A missing file falls back to defaults; a present but malformed
    /// file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.worldgen;
        if w.chunk_size <= 0 {
            return Err(ConfigError::Invalid("chunk_size must be positive".into()));
        }
        if w.world_size <= 0 || w.world_height <= 0 {
            return Err(ConfigError::Invalid("world extent must be positive".into()));
        }
        if w.min_height < 1 || w.min_height > w.max_height {
            return Err(ConfigError::Invalid(
                "height clamp must satisfy 1 <= min_height <= max_height".into(),
            ));
        }
        if w.max_height > w.world_height {
            return Err(ConfigError::Invalid("max_height exceeds world_height".into()));
        }
        if w.water_level >= w.world_height {
            return Err(ConfigError::Invalid("water_level exceeds world_height".into()));
        }
        if w.bands.is_empty() {
            return Err(ConfigError::Invalid("at least one selector band is required".into()));
        }
        if !(0.0..=1.0).contains(&w.tree_chance) {
            return Err(ConfigError::Invalid("tree_chance must be within [0, 1]".into()));
        }
        if self.chunks.preload_batch == 0 {
            return Err(ConfigError::Invalid("preload_batch must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
        let islands = EngineConfig {
            worldgen: WorldGenConfig::islands(),
            chunks: ChunkSysConfig::default(),
        };
        assert!(islands.validate().is_ok());
    }

    #[test]
    fn toml_round_trip_preserves_everything() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("conf").join("sandvox.toml");

        let config = EngineConfig::default();
        config.save(&path).unwrap();
        let loaded = EngineConfig::load(&path).unwrap();

        // The fallback band's -inf threshold has to survive the file trip.
        assert_eq!(loaded, config);
        assert!(loaded.worldgen.bands[2].selector_min.is_infinite());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let loaded = EngineConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, EngineConfig::default());
    }

    #[test]
    fn validation_rejects_broken_configs() {
        let mut config = EngineConfig::default();
        config.chunks.preload_batch = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = EngineConfig::default();
        config.worldgen.min_height = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.worldgen.max_height = config.worldgen.world_height + 1;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.worldgen.bands.clear();
        assert!(config.validate().is_err());
    }
}
