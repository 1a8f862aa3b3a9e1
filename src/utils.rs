use directories::ProjectDirs;
use std::path::PathBuf;

/// Profile mode for the application (dev or prod)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

/// Get the configuration directory path for tagfield
/// If profile is Dev, uses "tagfield-dev" instead of "tagfield"
pub fn get_config_dir(profile: Profile) -> Option<PathBuf> {
    let app_name = match profile {
        Profile::Dev => "tagfield-dev",
        Profile::Prod => "tagfield",
    };
    // Use "com" as qualifier for better cross-platform compatibility
    ProjectDirs::from("com", "tagfield", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Parsed key binding information
#[derive(Debug, Clone)]
pub struct ParsedKeyBinding {
    pub key_code: crossterm::event::KeyCode,
    pub requires_ctrl: bool,
}

impl ParsedKeyBinding {
    /// Check whether a key event matches this binding
    pub fn matches(&self, key_event: &crossterm::event::KeyEvent) -> bool {
        let ctrl_held = has_primary_modifier(key_event.modifiers);
        key_event.code == self.key_code && ctrl_held == self.requires_ctrl
    }
}

/// Check if a key event has the primary modifier (Ctrl on Windows/Linux, Option/Alt on macOS)
/// This follows the standard cross-platform TUI pattern where Ctrl and Option/Alt are treated as equivalent
pub fn has_primary_modifier(modifiers: crossterm::event::KeyModifiers) -> bool {
    #[cfg(target_os = "macos")]
    {
        modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
            || modifiers.contains(crossterm::event::KeyModifiers::ALT)
    }

    #[cfg(not(target_os = "macos"))]
    {
        modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
    }
}

/// Format a key binding string for display, showing the platform-appropriate modifier
/// On macOS, "Ctrl+" is replaced with "Opt+" for better UX (Option key)
pub fn format_key_binding_for_display(key_binding: &str) -> String {
    #[cfg(target_os = "macos")]
    {
        key_binding.replace("Ctrl+", "Opt+")
    }

    #[cfg(not(target_os = "macos"))]
    {
        key_binding.to_string()
    }
}

/// Parse a key binding string from config into a ParsedKeyBinding
/// Supports: single keys ("q", "y"), special keys ("Enter", "Esc", "Tab"),
/// and modifiers ("Ctrl+s")
pub fn parse_key_binding(key_str: &str) -> Result<ParsedKeyBinding, String> {
    let key_str = key_str.trim();

    if let Some(key_part) = key_str.strip_prefix("Ctrl+") {
        let key_code = parse_key_code(key_part)?;
        return Ok(ParsedKeyBinding {
            key_code,
            requires_ctrl: true,
        });
    }

    let key_code = parse_key_code(key_str)?;
    Ok(ParsedKeyBinding {
        key_code,
        requires_ctrl: false,
    })
}

/// Parse a key code from a string (without modifiers)
fn parse_key_code(key_str: &str) -> Result<crossterm::event::KeyCode, String> {
    match key_str {
        "Enter" => Ok(crossterm::event::KeyCode::Enter),
        "Esc" | "Escape" => Ok(crossterm::event::KeyCode::Esc),
        "Backspace" => Ok(crossterm::event::KeyCode::Backspace),
        "Tab" => Ok(crossterm::event::KeyCode::Tab),
        "Space" | " " => Ok(crossterm::event::KeyCode::Char(' ')),
        "Left" => Ok(crossterm::event::KeyCode::Left),
        "Right" => Ok(crossterm::event::KeyCode::Right),
        "Up" => Ok(crossterm::event::KeyCode::Up),
        "Down" => Ok(crossterm::event::KeyCode::Down),
        "Home" => Ok(crossterm::event::KeyCode::Home),
        "End" => Ok(crossterm::event::KeyCode::End),
        "Delete" => Ok(crossterm::event::KeyCode::Delete),
        "F1" => Ok(crossterm::event::KeyCode::F(1)),
        "F2" => Ok(crossterm::event::KeyCode::F(2)),
        _ => {
            if key_str.chars().count() == 1 {
                match key_str.chars().next() {
                    Some(c) => Ok(crossterm::event::KeyCode::Char(c)),
                    None => Err("Empty key string after length check".to_string()),
                }
            } else {
                Err(format!("Unknown key binding: {}", key_str))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn parses_single_character_keys() {
        let binding = parse_key_binding("q").unwrap();
        assert_eq!(binding.key_code, KeyCode::Char('q'));
        assert!(!binding.requires_ctrl);
    }

    #[test]
    fn parses_special_keys() {
        assert_eq!(parse_key_binding("Enter").unwrap().key_code, KeyCode::Enter);
        assert_eq!(parse_key_binding("Esc").unwrap().key_code, KeyCode::Esc);
        assert_eq!(parse_key_binding("Tab").unwrap().key_code, KeyCode::Tab);
    }

    #[test]
    fn parses_ctrl_modifier() {
        let binding = parse_key_binding("Ctrl+s").unwrap();
        assert_eq!(binding.key_code, KeyCode::Char('s'));
        assert!(binding.requires_ctrl);
    }

    #[test]
    fn rejects_unknown_multi_character_keys() {
        assert!(parse_key_binding("NotAKey").is_err());
    }
}
