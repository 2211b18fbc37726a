//! User settings stored as settings.json in the app data directory

use crate::constants::DEFAULT_QUOTE_TAGS;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // View
    pub show_details: bool,
    pub use_24h_clock: bool,

    // Quote service tag filter, pipe-separated
    pub quote_tags: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            show_details: false,
            use_24h_clock: true,
            quote_tags: DEFAULT_QUOTE_TAGS.to_string(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.use_24h_clock);
        assert!(!settings.show_details);
        assert_eq!(settings.quote_tags, DEFAULT_QUOTE_TAGS);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.quote_tags, DEFAULT_QUOTE_TAGS);
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_x: Some(40.0),
            window_y: Some(60.0),
            window_w: Some(420.0),
            window_h: Some(640.0),
            show_details: true,
            use_24h_clock: false,
            quote_tags: "wisdom".to_string(),
        };
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_w, Some(420.0));
        assert!(loaded.show_details);
        assert!(!loaded.use_24h_clock);
        assert_eq!(loaded.quote_tags, "wisdom");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"show_details": true, "col_w_name": 200.0}"#,
        )
        .unwrap();
        let settings = Settings::load(dir.path());
        assert!(settings.show_details);
    }
}
