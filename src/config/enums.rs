//! Configuration enum types.

use crate::draw::{Color, color::WHITE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGBA components.
///
/// # Examples
/// ```toml
/// # Named color
/// line_color = "white"
///
/// # RGBA, each component 0.0 - 1.0
/// level_color = [1.0, 1.0, 1.0, 0.25]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, white, black, slate, transparent
    Name(String),
    /// `[red, green, blue, alpha]`, each component 0.0 - 1.0
    Rgba([f64; 4]),
}

impl ColorSpec {
    /// Resolves to a concrete [`Color`].
    ///
    /// Unknown names fall back to white with a warning. Components are
    /// clamped to 0.0 - 1.0.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using white", name);
                WHITE
            }),
            ColorSpec::Rgba(components) => Color::from_array(components.map(|c| c.clamp(0.0, 1.0))),
        }
    }

    /// Clamps out-of-range RGBA components in place, warning once per field.
    pub(crate) fn clamp_in_place(&mut self, field: &str) {
        if let ColorSpec::Rgba(components) = self {
            for (i, c) in components.iter_mut().enumerate() {
                if !(0.0..=1.0).contains(c) {
                    warn!("Invalid {}[{}] = {:.3}, clamping to 0.0-1.0", field, i, c);
                    *c = c.clamp(0.0, 1.0);
                }
            }
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Rgba([color.r, color.g, color.b, color.a])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::SLATE;

    #[test]
    fn named_and_rgba_colors() {
        assert_eq!(ColorSpec::Name("slate".into()).to_color(), SLATE);
        assert_eq!(
            ColorSpec::Rgba([1.0, 0.5, 0.0, 0.25]).to_color(),
            Color::new(1.0, 0.5, 0.0, 0.25)
        );
        assert_eq!(ColorSpec::Name("mauve".into()).to_color(), WHITE);
    }

    #[test]
    fn clamp_in_place_fixes_components() {
        let mut spec = ColorSpec::Rgba([1.5, -0.2, 0.5, 1.0]);
        spec.clamp_in_place("line_color");
        assert_eq!(spec, ColorSpec::Rgba([1.0, 0.0, 0.5, 1.0]));
    }

    #[test]
    fn deserializes_both_forms() {
        #[derive(Deserialize)]
        struct Wrapper {
            a: ColorSpec,
            b: ColorSpec,
        }
        let parsed: Wrapper = toml::from_str("a = \"red\"\nb = [0.0, 0.0, 1.0, 0.5]").unwrap();
        assert_eq!(parsed.a, ColorSpec::Name("red".into()));
        assert_eq!(parsed.b, ColorSpec::Rgba([0.0, 0.0, 1.0, 0.5]));
    }
}
