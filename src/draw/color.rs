//! RGBA color type and predefined color constants.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use chartmark::draw::Color;
/// let guide = Color::new(1.0, 1.0, 1.0, 0.25);
/// assert_eq!(guide.with_alpha(0.7).a, 0.7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from a `[r, g, b, a]` array as stored in the config file.
    pub fn from_array(rgba: [f64; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Predefined red color, used for bearish level highlights
pub const RED: Color = Color::new(0.94, 0.27, 0.27, 1.0);

/// Predefined green color, used for bullish level highlights
pub const GREEN: Color = Color::new(0.13, 0.77, 0.37, 1.0);

/// Predefined blue color (toolbar accent)
pub const BLUE: Color = Color::new(0.15, 0.39, 0.92, 1.0);

/// Predefined yellow color
pub const YELLOW: Color = Color::new(0.98, 0.8, 0.08, 1.0);

/// Predefined orange color
pub const ORANGE: Color = Color::new(0.9, 0.49, 0.13, 1.0);

/// Dark slate used as the default chart background
pub const SLATE: Color = Color::new(0.07, 0.09, 0.15, 1.0);

/// Fully transparent color, the state of a freshly cleared overlay
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
