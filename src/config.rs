//! Screen configuration
//!
//! Describes what the select screen shows: title text, the three selectable
//! ships and what is written under each one. Configs load from JSON; two
//! presets cover the stats layout and the labelled layout.

use crate::player::{PlayerAttributes, Stat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The screen always offers exactly this many ships
pub const PLAYER_COUNT: usize = 3;

/// Bundled config, relative to the working directory
pub const BUNDLED_CONFIG_PATH: &str = "assets/config/select_screen.json";

const USER_CONFIG_DIR: &str = "player-select";
const USER_CONFIG_FILE: &str = "select_screen.json";

/// Names the built-in preset used when no config file exists
pub const PRESET_ENV_VAR: &str = "PLAYER_SELECT_PRESET";

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    PlayerCount { expected: usize, found: usize },
    InitialSelection { index: usize, players: usize },
    StatPercent { name: String, percent: u8 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::PlayerCount { expected, found } => {
                write!(f, "Expected {} players, found {}", expected, found)
            }
            ConfigError::InitialSelection { index, players } => {
                write!(f, "Initial selection {} is out of range for {} players", index, players)
            }
            ConfigError::StatPercent { name, percent } => {
                write!(f, "Stat '{}' is {}%, must be at most 100%", name, percent)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Path to the ship sprite sheet
    pub sprite: String,
    #[serde(flatten)]
    pub attributes: PlayerAttributes,
}

impl PlayerConfig {
    fn new(sprite: &str, attributes: PlayerAttributes) -> Self {
        PlayerConfig {
            sprite: sprite.to_string(),
            attributes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default = "default_initial_selection")]
    pub initial_selection: usize,
    pub players: Vec<PlayerConfig>,
}

fn default_initial_selection() -> usize {
    1
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig::asteroids()
    }
}

impl ScreenConfig {
    /// Ship select with speed and fire-rate stats under each ship
    pub fn asteroids() -> Self {
        let ship = |n: u8, speed: u8, fire_rate: u8| {
            PlayerConfig::new(
                &format!("assets/spritesheets/shipsheet_{}.png", n),
                PlayerAttributes::with_stats(vec![
                    Stat::new("SPEED", speed),
                    Stat::new("FIRE RATE", fire_rate),
                ]),
            )
        };

        ScreenConfig {
            title: "ASTEROIDS".to_string(),
            subtitle: Some("SELECT YOUR PLAYER".to_string()),
            initial_selection: default_initial_selection(),
            players: vec![ship(1, 80, 40), ship(2, 60, 60), ship(3, 40, 80)],
        }
    }

    /// Portfolio landing page where each ship is a labelled section
    pub fn portfolio() -> Self {
        let ship = |n: u8, label: &str| {
            PlayerConfig::new(
                &format!("assets/images/ship_{}.png", n),
                PlayerAttributes::with_label(label),
            )
        };

        ScreenConfig {
            title: "PORTFOLIO SITE".to_string(),
            subtitle: Some("SELECT YOUR PLAYER".to_string()),
            initial_selection: default_initial_selection(),
            players: vec![ship(1, "WORK"), ship(2, "PROJECTS"), ship(3, "ABOUT ME")],
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "asteroids" => Some(ScreenConfig::asteroids()),
            "portfolio" => Some(ScreenConfig::portfolio()),
            _ => None,
        }
    }

    /// Preset named by [`PRESET_ENV_VAR`], or the default when unset or unknown
    pub fn preset_from_env() -> Self {
        match std::env::var(PRESET_ENV_VAR) {
            Ok(name) => ScreenConfig::preset(&name).unwrap_or_else(|| {
                log::warn!("Unknown preset '{}', using default", name);
                ScreenConfig::default()
            }),
            Err(_) => ScreenConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScreenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        ScreenConfig::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != PLAYER_COUNT {
            return Err(ConfigError::PlayerCount {
                expected: PLAYER_COUNT,
                found: self.players.len(),
            });
        }

        if self.initial_selection >= self.players.len() {
            return Err(ConfigError::InitialSelection {
                index: self.initial_selection,
                players: self.players.len(),
            });
        }

        for stat in self.players.iter().flat_map(|p| p.attributes.stats.iter()) {
            if stat.percent > 100 {
                return Err(ConfigError::StatPercent {
                    name: stat.name.clone(),
                    percent: stat.percent,
                });
            }
        }

        Ok(())
    }
}

/// Candidate config files, highest priority first
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE));
    }
    paths.push(PathBuf::from(BUNDLED_CONFIG_PATH));
    paths
}

/// Loads the first existing file in `paths`, or `fallback` when none exist.
///
/// A file that exists but fails to read or validate is an error; it is never
/// silently replaced by the fallback.
pub fn load_first_existing(
    paths: &[PathBuf],
    fallback: ScreenConfig,
) -> Result<(ScreenConfig, Option<PathBuf>), ConfigError> {
    for path in paths {
        if path.exists() {
            let config = ScreenConfig::load_from_file(path)?;
            return Ok((config, Some(path.clone())));
        }
        log::debug!("No screen config at {}", path.display());
    }

    log::warn!("No screen config found, using built-in '{}' preset", fallback.title);
    Ok((fallback, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(ScreenConfig::asteroids().validate().is_ok());
        assert!(ScreenConfig::portfolio().validate().is_ok());
        assert_eq!(ScreenConfig::default(), ScreenConfig::asteroids());
    }

    #[test]
    fn test_parse_labelled_config() {
        let json = r#"{
            "title": "PORTFOLIO SITE",
            "players": [
                { "sprite": "a.png", "label": "WORK" },
                { "sprite": "b.png", "label": "PROJECTS" },
                { "sprite": "c.png" }
            ]
        }"#;

        let config = ScreenConfig::from_json(json).unwrap();
        assert_eq!(config.initial_selection, 1);
        assert_eq!(config.subtitle, None);
        assert_eq!(config.players[0].attributes.label.as_deref(), Some("WORK"));
        assert!(config.players[2].attributes.label.is_none());
        assert!(config.players[2].attributes.stats.is_empty());
    }

    #[test]
    fn test_parse_stats_config() {
        let json = r#"{
            "title": "ASTEROIDS",
            "subtitle": "SELECT YOUR PLAYER",
            "initial_selection": 0,
            "players": [
                { "sprite": "a.png", "stats": [{ "name": "SPEED", "percent": 70 }] },
                { "sprite": "b.png", "stats": [] },
                { "sprite": "c.png" }
            ]
        }"#;

        let config = ScreenConfig::from_json(json).unwrap();
        assert_eq!(config.initial_selection, 0);
        assert_eq!(config.players[0].attributes.stats, vec![Stat::new("SPEED", 70)]);
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = ScreenConfig::portfolio();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ScreenConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_player_count() {
        let mut config = ScreenConfig::asteroids();
        config.players.pop();

        match config.validate() {
            Err(ConfigError::PlayerCount { expected: 3, found: 2 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_out_of_range_initial_selection() {
        let mut config = ScreenConfig::asteroids();
        config.initial_selection = 3;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialSelection { index: 3, players: 3 })
        ));
    }

    #[test]
    fn test_rejects_stat_over_100() {
        let mut config = ScreenConfig::asteroids();
        config.players[1].attributes.stats[0].percent = 150;

        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Stat 'SPEED' is 150%, must be at most 100%");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            ScreenConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_files_fall_back_to_default() {
        let paths = vec![PathBuf::from("definitely/not/here/select_screen.json")];
        let (config, source) = load_first_existing(&paths, ScreenConfig::portfolio()).unwrap();

        assert_eq!(config, ScreenConfig::portfolio());
        assert!(source.is_none());
    }

    #[test]
    fn test_invalid_file_is_not_replaced_by_default() {
        let path = std::env::temp_dir().join(format!(
            "player_select_invalid_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "title": "X", "players": [] }"#).unwrap();

        let result = load_first_existing(&[path.clone()], ScreenConfig::default());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::PlayerCount { found: 0, .. })));
    }

    #[test]
    fn test_bundled_config_matches_default_preset() {
        let bundled = include_str!("../assets/config/select_screen.json");
        assert_eq!(ScreenConfig::from_json(bundled).unwrap(), ScreenConfig::asteroids());
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(ScreenConfig::preset("Portfolio"), Some(ScreenConfig::portfolio()));
        assert_eq!(ScreenConfig::preset("asteroids"), Some(ScreenConfig::asteroids()));
        assert_eq!(ScreenConfig::preset("tetris"), None);
    }

    #[test]
    fn test_bundled_path_is_last_resort() {
        let paths = config_search_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from(BUNDLED_CONFIG_PATH)));
    }

    #[test]
    fn test_error_converts_to_string() {
        let message: String = ConfigError::PlayerCount { expected: 3, found: 4 }.into();
        assert_eq!(message, "Expected 3 players, found 4");
    }
}
