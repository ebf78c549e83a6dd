//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level baker configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Bake dispatch settings.
    pub bake: BakeConfig,
    /// Atmosphere and sun settings.
    pub atmosphere: AtmosphereConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Bake dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BakeConfig {
    /// Texels per cubemap face side.
    pub face_size: u32,
    /// Above-horizon blend preset: "scattering", "dome-mix", or "tonemapped".
    pub preset: String,
    /// Directory the baked faces and preview target are written to.
    pub output_dir: PathBuf,
    /// Worker thread count (0 = one per CPU).
    pub threads: usize,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            face_size: 128,
            preset: "scattering".to_string(),
            output_dir: PathBuf::from("envmap_out"),
            threads: 0,
        }
    }
}

/// Atmosphere and sun configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AtmosphereConfig {
    /// Normalized time of day in `[0, 1)`. 0.5 is noon.
    pub time_of_day: f32,
    /// Primary ray-march steps per texel.
    pub samples: u32,
    /// Secondary (toward-sun) march steps per primary sample.
    pub light_samples: u32,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            time_of_day: 0.35,
            samples: 16,
            light_samples: 8,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// The default config directory: `<user config dir>/cirrus`, falling back
    /// to the working directory when the platform offers no config dir.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("cirrus"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.bake.face_size, 128);
        assert_eq!(config.bake.preset, "scattering");
        assert_eq!(config.atmosphere.samples, 16);
        assert!((0.0..1.0).contains(&config.atmosphere.time_of_day));
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.bake.face_size = 64;
        config.atmosphere.time_of_day = 0.72;
        config.save(dir.path()).unwrap();

        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_partial_config_fills_missing_sections_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.ron"),
            "(bake: (face_size: 32))",
        )
        .unwrap();

        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config.bake.face_size, 32);
        assert_eq!(config.bake.preset, "scattering");
        assert_eq!(config.atmosphere, AtmosphereConfig::default());
    }

    #[test]
    fn test_malformed_config_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "(bake: oops").unwrap();

        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
