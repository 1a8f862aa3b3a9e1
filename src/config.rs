use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the form field the serialized value is written to
    #[serde(default = "default_field_name")]
    pub field_name: String,
    #[serde(default)]
    pub key_bindings: KeyBindings,
    #[serde(default = "default_current_theme")]
    pub current_theme: String,
    #[serde(default)]
    pub themes: HashMap<String, Theme>,
    #[serde(default = "default_config_version")]
    pub config_version: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_quit")]
    pub quit: String,
    #[serde(default = "default_accept")]
    pub accept: String,
    #[serde(default = "default_focus_next")]
    pub focus_next: String,
    #[serde(default = "default_commit")]
    pub commit: String,
    #[serde(default = "default_remove")]
    pub remove: String,
    #[serde(default = "default_list_up")]
    pub list_up: String,
    #[serde(default = "default_list_down")]
    pub list_down: String,
    #[serde(default = "default_copy")]
    pub copy: String,
    #[serde(default = "default_help")]
    pub help: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_fg")]
    pub fg: String,
    #[serde(default = "default_bg")]
    pub bg: String,
    #[serde(default = "default_highlight_bg")]
    pub highlight_bg: String,
    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: String,
}

impl Default for Config {
    fn default() -> Self {
        let mut themes = HashMap::new();

        // Add example custom theme for users to see how to define themes
        themes.insert(
            "lightblue".to_string(),
            Theme {
                fg: "cyan".to_string(),
                bg: "black".to_string(),
                highlight_bg: "blue".to_string(),
                highlight_fg: "white".to_string(),
            },
        );

        Self {
            field_name: default_field_name(),
            key_bindings: KeyBindings::default(),
            current_theme: default_current_theme(),
            themes,
            config_version: Some(CURRENT_CONFIG_VERSION),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: default_quit(),
            accept: default_accept(),
            focus_next: default_focus_next(),
            commit: default_commit(),
            remove: default_remove(),
            list_up: default_list_up(),
            list_down: default_list_down(),
            copy: default_copy(),
            help: default_help(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: default_fg(),
            bg: default_bg(),
            highlight_bg: default_highlight_bg(),
            highlight_fg: default_highlight_fg(),
        }
    }
}

impl Theme {
    /// Get preset themes that are always available
    pub fn get_preset_themes() -> HashMap<String, Theme> {
        let mut themes = HashMap::new();

        themes.insert(
            "default".to_string(),
            Theme {
                fg: "white".to_string(),
                bg: "black".to_string(),
                highlight_bg: "blue".to_string(),
                highlight_fg: "white".to_string(),
            },
        );

        themes.insert(
            "dark".to_string(),
            Theme {
                fg: "white".to_string(),
                bg: "black".to_string(),
                highlight_bg: "cyan".to_string(),
                highlight_fg: "black".to_string(),
            },
        );

        themes.insert(
            "light".to_string(),
            Theme {
                fg: "black".to_string(),
                bg: "white".to_string(),
                highlight_bg: "blue".to_string(),
                highlight_fg: "white".to_string(),
            },
        );

        themes.insert(
            "green".to_string(),
            Theme {
                fg: "green".to_string(),
                bg: "black".to_string(),
                highlight_bg: "yellow".to_string(),
                highlight_fg: "black".to_string(),
            },
        );

        themes
    }
}

// Default value functions
fn default_field_name() -> String {
    "categoriesString".to_string()
}

fn default_quit() -> String {
    "Esc".to_string()
}

fn default_accept() -> String {
    "Ctrl+s".to_string()
}

fn default_focus_next() -> String {
    "Tab".to_string()
}

fn default_commit() -> String {
    "Enter".to_string()
}

fn default_remove() -> String {
    "Enter".to_string()
}

fn default_list_up() -> String {
    "Up".to_string()
}

fn default_list_down() -> String {
    "Down".to_string()
}

fn default_copy() -> String {
    "Ctrl+y".to_string()
}

fn default_help() -> String {
    "F1".to_string()
}

fn default_current_theme() -> String {
    "default".to_string()
}

fn default_fg() -> String {
    "white".to_string()
}

fn default_bg() -> String {
    "black".to_string()
}

fn default_highlight_bg() -> String {
    "blue".to_string()
}

fn default_highlight_fg() -> String {
    "white".to_string()
}

fn default_config_version() -> Option<u32> {
    Some(CURRENT_CONFIG_VERSION)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
}

impl Config {
    /// Load configuration from file, or create default if missing
    /// Uses the provided profile to determine the config path
    pub fn load_with_profile(profile: utils::Profile) -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path(profile)?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::ReadError(e.to_string()))?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            // Create default config and save it
            let mut config = Config::default();
            config.save_with_profile(profile)?;
            Ok(config)
        }
    }

    /// Load configuration from file, using production profile
    /// Use load_with_profile() to specify a different profile
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_profile(utils::Profile::Prod)
    }

    /// Save configuration to file
    pub fn save_with_profile(&mut self, profile: utils::Profile) -> Result<(), ConfigError> {
        // Ensure config version is set before saving
        self.config_version = Some(CURRENT_CONFIG_VERSION);

        let config_path = Self::get_config_path(profile)?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path(profile: utils::Profile) -> Result<PathBuf, ConfigError> {
        let config_dir = utils::get_config_dir(profile).ok_or_else(|| {
            ConfigError::ConfigDirError("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the currently active theme
    /// If highlight_fg is not set (empty string), it will be calculated from highlight_bg
    pub fn get_active_theme(&self) -> Theme {
        use crate::tui::widgets::color::{
            format_color_for_display, get_contrast_text_color, parse_color,
        };

        let mut theme = if let Some(theme) = self.themes.get(&self.current_theme) {
            theme.clone()
        } else if let Some(theme) = Theme::get_preset_themes().get(&self.current_theme) {
            theme.clone()
        } else {
            // Final fallback: default theme
            Theme::get_preset_themes()
                .get("default")
                .cloned()
                .unwrap_or_default()
        };

        // If highlight_fg is empty or not set, calculate it from highlight_bg
        if theme.highlight_fg.is_empty() {
            let highlight_bg_color = parse_color(&theme.highlight_bg);
            let calculated_fg = get_contrast_text_color(highlight_bg_color);
            theme.highlight_fg = format_color_for_display(&calculated_fg);
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.field_name, "categoriesString");
        assert_eq!(config.current_theme, "default");
        assert_eq!(config.key_bindings.commit, "Enter");
        assert_eq!(config.key_bindings.accept, "Ctrl+s");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.field_name, config.field_name);
        assert_eq!(parsed.key_bindings.quit, config.key_bindings.quit);
    }

    #[test]
    fn partial_key_bindings_keep_remaining_defaults() {
        let config: Config = toml::from_str("[key_bindings]\nquit = \"q\"\n").unwrap();
        assert_eq!(config.key_bindings.quit, "q");
        assert_eq!(config.key_bindings.commit, "Enter");
    }

    #[test]
    fn unknown_theme_falls_back_to_default_preset() {
        let mut config = Config::default();
        config.current_theme = "missing".to_string();
        let theme = config.get_active_theme();
        assert_eq!(theme.highlight_bg, "blue");
    }

    #[test]
    fn empty_highlight_fg_is_derived_from_background() {
        let mut config = Config::default();
        config.themes.insert(
            "contrast".to_string(),
            Theme {
                fg: "white".to_string(),
                bg: "black".to_string(),
                highlight_bg: "white".to_string(),
                highlight_fg: String::new(),
            },
        );
        config.current_theme = "contrast".to_string();
        let theme = config.get_active_theme();
        assert_eq!(theme.highlight_fg, "black");
    }
}
