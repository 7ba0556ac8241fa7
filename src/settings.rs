//! User settings stored as settings.json in the app data directory
//!
//! Only window geometry and assistant endpoint config live here. Theme,
//! language and every other view selection start fresh each launch.

use crate::constants::{DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL, DEFAULT_THINKING_BUDGET};
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

    // Assistant endpoint
    pub ai_base_url: String,
    pub ai_model: String,
    pub ai_thinking_budget: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            ai_base_url: DEFAULT_AI_BASE_URL.to_string(),
            ai_model: DEFAULT_AI_MODEL.to_string(),
            ai_thinking_budget: DEFAULT_THINKING_BUDGET,
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

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "dual-portfolio-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = temp_dir("missing");
        let settings = Settings::load(&dir);
        assert_eq!(settings.ai_model, DEFAULT_AI_MODEL);
        assert!(settings.window_w.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = temp_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{"ai_model":"gemini-2.5-flash"}"#).unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.ai_model, "gemini-2.5-flash");
        assert_eq!(settings.ai_base_url, DEFAULT_AI_BASE_URL);
        assert_eq!(settings.ai_thinking_budget, DEFAULT_THINKING_BUDGET);
    }

    #[test]
    fn test_save_then_load() {
        let dir = temp_dir("save");
        let settings = Settings {
            window_w: Some(1280.0),
            window_h: Some(800.0),
            ..Settings::default()
        };
        settings.save(&dir);
        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_w, Some(1280.0));
        assert_eq!(loaded.window_h, Some(800.0));
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = temp_dir("corrupt");
        std::fs::write(dir.join("settings.json"), "{ nope").unwrap();
        assert_eq!(Settings::load(&dir).ai_model, DEFAULT_AI_MODEL);
    }
}
