//! Small helpers shared by config loading and the host.

use crate::draw::{Color, color::*};
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;
use std::path::PathBuf;

// ============================================================================
// Color Utilities
// ============================================================================

/// Maps a color name to a predefined [`Color`].
///
/// Recognized names (case-insensitive): red, green, blue, yellow, orange,
/// white, black, slate, transparent.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "slate" => Some(SLATE),
        "transparent" | "none" => Some(TRANSPARENT),
        _ => None,
    }
}

// ============================================================================
// Path Utilities
// ============================================================================

/// Whether every specifier in a chrono format template is recognized.
pub fn is_valid_template(template: &str) -> bool {
    StrftimeItems::new(template).all(|item| !matches!(item, Item::Error))
}

/// Builds a file name from a chrono format template and an extension.
///
/// Returns `None` when the template holds an unknown specifier.
pub fn generate_filename(template: &str, extension: &str) -> Option<String> {
    if !is_valid_template(template) {
        return None;
    }
    let mut filename = String::new();
    write!(filename, "{}.{}", Local::now().format(template), extension).ok()?;
    Some(filename)
}

/// Expands a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names_resolve() {
        assert_eq!(name_to_color("White"), Some(WHITE));
        assert_eq!(name_to_color(" slate "), Some(SLATE));
        assert_eq!(name_to_color("transparent"), Some(TRANSPARENT));
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn filename_uses_template_and_extension() {
        let filename = generate_filename("chart_%Y%m%d", "png").unwrap();
        assert!(filename.starts_with("chart_"));
        assert!(filename.ends_with(".png"));
        // "chart_" + 8 date digits + ".png"
        assert_eq!(filename.len(), 6 + 8 + 4);
    }

    #[test]
    fn unknown_specifier_is_rejected() {
        assert!(!is_valid_template("shot_%Q"));
        assert!(is_valid_template("shot_%Y-%m-%d_%H%M%S"));
        assert_eq!(generate_filename("shot_%Q", "png"), None);
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
        if dirs::home_dir().is_some() {
            assert!(!expand_tilde("~/Pictures").to_string_lossy().starts_with('~'));
        }
    }
}
