use hexstrip_core::{BlankLines, LoadOptions, StripMode, DEFAULT_SCALE};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "./analysis/output.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: String,
    pub scale: u32,
    pub strip_mode: StripMode,
    pub blank_lines: BlankLines,
    pub window_title: String,
    pub output: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            scale: DEFAULT_SCALE,
            strip_mode: StripMode::Anywhere,
            blank_lines: BlankLines::Skip,
            window_title: "hexstrip".to_string(),
            output: None,
        }
    }
}

impl Settings {
    /// Get the config file path relative to the executable
    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("hexstrip.json");
        path
    }

    /// Load settings from `path`, falling back to defaults on error
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(
                        "Failed to parse {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            // Missing file is the normal case
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            scale: self.scale,
            strip_mode: self.strip_mode,
            blank_lines: self.blank_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.input, "./analysis/output.txt");
        assert_eq!(settings.scale, 12);
        assert_eq!(settings.strip_mode, StripMode::Anywhere);
        assert_eq!(settings.blank_lines, BlankLines::Skip);
        assert!(settings.output.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"scale": 4, "strip_mode": "leading"}"#).unwrap();
        assert_eq!(settings.scale, 4);
        assert_eq!(settings.strip_mode, StripMode::Leading);
        assert_eq!(settings.input, DEFAULT_INPUT);
        assert_eq!(settings.blank_lines, BlankLines::Skip);
    }

    #[test]
    fn test_save_and_load() {
        let test_dir = std::env::temp_dir().join("hexstrip_test_settings");
        fs::create_dir_all(&test_dir).unwrap();
        let path = test_dir.join("hexstrip.json");

        let settings = Settings {
            scale: 3,
            blank_lines: BlankLines::Reject,
            output: Some("strip.png".to_string()),
            ..Settings::default()
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert_eq!(loaded, settings);

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn test_missing_or_invalid_file_gives_defaults() {
        let test_dir = std::env::temp_dir().join("hexstrip_test_settings_invalid");
        fs::create_dir_all(&test_dir).unwrap();

        assert_eq!(
            Settings::load(&test_dir.join("does_not_exist.json")),
            Settings::default()
        );

        let bad = test_dir.join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        assert_eq!(Settings::load(&bad), Settings::default());

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn test_load_options_follow_settings() {
        let settings = Settings {
            scale: 2,
            strip_mode: StripMode::Leading,
            ..Settings::default()
        };
        let opts = settings.load_options();
        assert_eq!(opts.scale, 2);
        assert_eq!(opts.strip_mode, StripMode::Leading);
        assert_eq!(opts.blank_lines, BlankLines::Skip);
    }
}
