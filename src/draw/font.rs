//! Font descriptor for label text rendering.

use serde::{Deserialize, Serialize};

/// Font configuration for guide labels.
///
/// Carries family, weight and pixel size together so a surface can be handed a
/// single value by `Surface::set_font`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light")
    pub weight: String,

    /// Font size in pixels
    pub size: f64,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: impl Into<String>, weight: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            size,
        }
    }

    /// Converts this descriptor to a Pango font description string.
    ///
    /// Format: "Family Weight Sizepx", e.g. "Sans 11px" or "Monospace Bold 14px".
    /// The `px` suffix makes Pango interpret the size in device units, matching
    /// the pixel space the annotations live in.
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}px", self.size.round() as i32));
        parts.join(" ")
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Sans", "normal", 11.0)
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        assert_eq!(FontDescriptor::default().to_pango_string(), "Sans 11px");
    }

    #[test]
    fn test_pango_string_weighted() {
        let font = FontDescriptor::new("JetBrains Mono", "light", 13.6);
        assert_eq!(font.to_pango_string(), "JetBrains Mono Light 14px");
    }
}
