//! Configuration file handling for the vitae terminal portfolio.
//!
//! The config file is optional. A missing, unreadable, or malformed
//! file degrades to defaults; the app never fails to start over
//! configuration.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use vitae_core::{AnimationSpeed, BackgroundStyle};

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Background style at startup.
    pub background: BackgroundStyle,
    /// Animation speed at startup.
    pub speed: AnimationSpeed,
    /// Whether to show the welcome splash.
    pub show_welcome: bool,
    /// Whether to enable mouse capture (pointer-reactive decorations).
    pub mouse_capture: bool,
    /// Number of particles in the particle-net background.
    pub particle_count: usize,
    /// Fixed seed for particle placement; random when absent.
    pub particle_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: BackgroundStyle::default(),
            speed: AnimationSpeed::default(),
            show_welcome: true,
            mouse_capture: true,
            particle_count: 48,
            particle_seed: None,
        }
    }
}

/// On-disk shape: every field optional, unknown keys ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    background: Option<String>,
    speed: Option<String>,
    show_welcome: Option<bool>,
    mouse_capture: Option<bool>,
    particle_count: Option<usize>,
    particle_seed: Option<u64>,
}

impl Config {
    /// Load from the platform config directory, falling back to defaults.
    pub fn load() -> Config {
        config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|text| Config::from_toml(&text))
            .unwrap_or_default()
    }

    /// Parse a TOML document; malformed input yields the defaults.
    pub fn from_toml(text: &str) -> Config {
        toml::from_str::<RawConfig>(text)
            .map(Config::from_raw)
            .unwrap_or_default()
    }

    fn from_raw(raw: RawConfig) -> Config {
        let defaults = Config::default();
        Config {
            background: raw
                .background
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.background),
            speed: raw
                .speed
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.speed),
            show_welcome: raw.show_welcome.unwrap_or(defaults.show_welcome),
            mouse_capture: raw.mouse_capture.unwrap_or(defaults.mouse_capture),
            // Pair rendering is O(n²); keep the count bounded.
            particle_count: raw
                .particle_count
                .unwrap_or(defaults.particle_count)
                .clamp(1, 512),
            particle_seed: raw.particle_seed,
        }
    }
}

/// Path of the config file, if a config directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vitae").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.background, BackgroundStyle::ParticleNet);
        assert_eq!(config.speed, AnimationSpeed::Medium);
        assert!(config.show_welcome);
        assert_eq!(config.particle_count, 48);
        assert_eq!(config.particle_seed, None);
    }

    #[test]
    fn test_full_document() {
        let config = Config::from_toml(
            r#"
            background = "circuit"
            speed = "fast"
            show_welcome = false
            mouse_capture = false
            particle_count = 64
            particle_seed = 7
            "#,
        );
        assert_eq!(config.background, BackgroundStyle::CircuitBoard);
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert!(!config.show_welcome);
        assert!(!config.mouse_capture);
        assert_eq!(config.particle_count, 64);
        assert_eq!(config.particle_seed, Some(7));
    }

    #[test]
    fn test_malformed_document_falls_back() {
        assert_eq!(Config::from_toml("background = ["), Config::default());
    }

    #[test]
    fn test_unknown_values_keep_defaults() {
        let config = Config::from_toml("background = \"plasma\"\nspeed = \"warp\"");
        assert_eq!(config.background, BackgroundStyle::ParticleNet);
        assert_eq!(config.speed, AnimationSpeed::Medium);
    }

    #[test]
    fn test_particle_count_is_clamped() {
        assert_eq!(Config::from_toml("particle_count = 0").particle_count, 1);
        assert_eq!(
            Config::from_toml("particle_count = 100000").particle_count,
            512
        );
    }
}
