//! Game settings and preferences
//!
//! Read from a JSON file at startup. Every field has a default, so a partial
//! file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRAME_RATE;
use crate::error::{Result, read_to_string};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub frame_rate: u32,
    /// RNG seed; derived from the clock when absent
    pub seed: Option<u64>,

    // === High scores ===
    /// Name recorded next to new high scores
    pub player_name: String,
    /// Leaderboard file
    pub high_score_path: PathBuf,

    // === Content ===
    /// JSON string table overriding the built-in English text
    pub strings_path: Option<PathBuf>,
    /// JSON level pack replacing the built-in campaign
    pub levels_path: Option<PathBuf>,

    // === Loop ===
    /// Sleep between ticks to hold the frame rate
    pub realtime: bool,
    /// Stop after this many ticks (demo runs)
    pub max_ticks: Option<u64>,
    /// Ticks between HUD log lines
    pub hud_log_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            seed: None,

            player_name: "Player".to_string(),
            high_score_path: PathBuf::from("scores.json"),

            strings_path: None,
            levels_path: None,

            realtime: true,
            max_ticks: None,
            hud_log_interval: DEFAULT_FRAME_RATE as u64,
        }
    }
}

impl Settings {
    /// Parse settings, clamping values the loop cannot run with
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        if settings.frame_rate == 0 {
            log::warn!("frame_rate 0 is not playable, using {}", DEFAULT_FRAME_RATE);
            settings.frame_rate = DEFAULT_FRAME_RATE;
        }
        settings.hud_log_interval = settings.hud_log_interval.max(1);
        Ok(settings)
    }

    /// Load settings from disk, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match read_to_string(path).and_then(|json| Self::from_json(&json)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// The configured seed, or one derived from the system clock
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "player_name": "Ada" }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.player_name, "Ada");
        assert_eq!(settings.frame_rate, DEFAULT_FRAME_RATE);
        assert!(settings.realtime);
        assert_eq!(settings.seed_or_clock(), 7);
    }

    #[test]
    fn test_zero_frame_rate_clamped() {
        let settings = Settings::from_json(r#"{ "frame_rate": 0, "hud_log_interval": 0 }"#).unwrap();
        assert_eq!(settings.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(settings.hud_log_interval, 1);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/snake-levels/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ frame_rate").is_err());
    }
}
