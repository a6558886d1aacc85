//! Game settings
//!
//! Loaded from an optional JSON file. Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::renderer::RenderOptions;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed run seed; `None` picks one from the system clock
    pub seed: Option<u64>,
    /// Let the built-in player drive the session
    pub autoplay: bool,
    /// Simulated seconds the headless driver runs for
    pub run_seconds: f32,
    /// Light a lane's divider on a successful press
    pub lane_flash: bool,
    /// Debug-level logging unless RUST_LOG says otherwise
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autoplay: true,
            run_seconds: 60.0,
            lane_flash: true,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {e}; using default settings", path.display());
                Self::default()
            }
        }
    }

    /// Seed to run with: the configured one or a clock-derived one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            lane_flash: self.lane_flash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "autoplay": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.autoplay);
        assert_eq!(settings.run_seconds, 60.0);
        assert!(settings.lane_flash);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ seed: ").is_err());
        assert!(Settings::from_json(r#"{ "run_seconds": "long" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            verbose: true,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_fixed_seed_is_used() {
        let settings = Settings {
            seed: Some(99),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(), 99);
    }
}
