//! Compiled-in widget configuration.
//!
//! The track list and player defaults ship inside the binary as
//! `assets/player.json`; nothing here is read at runtime from outside.

use crate::error::{PlayerError, Result};
use dioxus::logger::tracing::{error, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const SHIPPED_CONFIG_JSON: &str = include_str!("../assets/player.json");

/// Parsed once per page session.
pub static SHIPPED_CONFIG: Lazy<PlayerConfig> = Lazy::new(PlayerConfig::load);

/// One playable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Display label
    pub title: String,
    /// Locator the host audio element can resolve
    pub source: String,
}

/// How much of the file the host should fetch before playback starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preload {
    None,
    #[default]
    Metadata,
    Auto,
}

impl Preload {
    pub fn as_attr(self) -> &'static str {
        match self {
            Preload::None => "none",
            Preload::Metadata => "metadata",
            Preload::Auto => "auto",
        }
    }
}

/// What happens to playback when previous/next switches tracks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrackChangePolicy {
    /// Keep playing if the previous track was playing
    #[default]
    Resume,
    /// Always land paused on the new track
    Stop,
}

/// Player settings shipped with the build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub title: String,
    pub tracks: Vec<Track>,
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,
    #[serde(default)]
    pub preload: Preload,
    #[serde(default)]
    pub track_change: TrackChangePolicy,
    #[serde(default = "default_seek_step_secs")]
    pub seek_step_secs: f64,
    #[serde(default = "default_volume_step")]
    pub volume_step: f64,
}

fn default_initial_volume() -> f64 {
    1.0
}

fn default_seek_step_secs() -> f64 {
    5.0
}

fn default_volume_step() -> f64 {
    0.05
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            title: "MP3 Player".to_string(),
            tracks: vec![Track {
                title: "Untitled".to_string(),
                source: "/assets/audio/track.mp3".to_string(),
            }],
            initial_volume: default_initial_volume(),
            preload: Preload::default(),
            track_change: TrackChangePolicy::default(),
            seek_step_secs: default_seek_step_secs(),
            volume_step: default_volume_step(),
        }
    }
}

impl PlayerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: PlayerConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the shipped config, falling back to defaults when it is broken.
    pub fn load() -> Self {
        match Self::from_json(SHIPPED_CONFIG_JSON) {
            Ok(config) => {
                info!(
                    "[config] loaded {} track(s) for \"{}\"",
                    config.tracks.len(),
                    config.title
                );
                config
            }
            Err(err) => {
                error!("[config] {err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(PlayerError::Config("track list is empty".to_string()));
        }
        if let Some(pos) = self.tracks.iter().position(|t| t.source.trim().is_empty()) {
            return Err(PlayerError::Config(format!("track {pos} has no source")));
        }
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(PlayerError::Config(format!(
                "initial_volume {} is outside [0, 1]",
                self.initial_volume
            )));
        }
        if !(self.seek_step_secs.is_finite() && self.seek_step_secs > 0.0) {
            return Err(PlayerError::Config("seek_step_secs must be positive".to_string()));
        }
        if !(self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(PlayerError::Config("volume_step must be in (0, 1]".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_is_valid() {
        let config = PlayerConfig::from_json(SHIPPED_CONFIG_JSON).expect("shipped config");
        assert_eq!(config.tracks.len(), 1);
        assert_eq!(config.preload, Preload::Metadata);
        assert_eq!(config.track_change, TrackChangePolicy::Resume);
        assert_eq!(config.tracks[0].title, "⏸ TITLE - This is my song name");
    }

    #[test]
    fn optional_fields_take_defaults() {
        let config = PlayerConfig::from_json(
            r#"{"title":"t","tracks":[{"title":"a","source":"a.mp3"}]}"#,
        )
        .unwrap();
        assert_eq!(config.initial_volume, 1.0);
        assert_eq!(config.seek_step_secs, 5.0);
        assert_eq!(config.track_change, TrackChangePolicy::Resume);
    }

    #[test]
    fn empty_track_list_is_rejected() {
        let err = PlayerConfig::from_json(r#"{"title":"t","tracks":[]}"#).unwrap_err();
        assert!(matches!(err, PlayerError::Config(_)));
    }

    #[test]
    fn blank_source_is_rejected() {
        let err = PlayerConfig::from_json(
            r#"{"title":"t","tracks":[{"title":"a","source":"  "}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("track 0"));
    }

    #[test]
    fn volume_out_of_range_is_rejected() {
        let err = PlayerConfig::from_json(
            r#"{"title":"t","initial_volume":1.5,"tracks":[{"title":"a","source":"a.mp3"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PlayerError::Config(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PlayerConfig::from_json("{").unwrap_err();
        assert!(matches!(err, PlayerError::Json(_)));
    }

    #[test]
    fn default_config_validates() {
        PlayerConfig::default().validate().unwrap();
    }
}
