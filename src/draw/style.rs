//! Paint settings applied when rendering annotations.

use super::color::{Color, WHITE};
use super::font::FontDescriptor;

/// Stroke color and width for one family of lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Appearance of Fibonacci guide levels and their labels.
#[derive(Clone, Debug, PartialEq)]
pub struct FibonacciStyle {
    /// Stroke used for every guide line
    pub level: StrokeStyle,
    /// Label fill color
    pub label_color: Color,
    /// Label font
    pub label_font: FontDescriptor,
    /// Label position relative to the guide's end anchor and level, in pixels
    pub label_offset: (f64, f64),
}

/// Complete paint configuration handed to the renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationStyle {
    pub trendline: StrokeStyle,
    /// Horizontal, vertical and ray lines
    pub line: StrokeStyle,
    pub fibonacci: FibonacciStyle,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            trendline: StrokeStyle::new(WHITE.with_alpha(0.9), 1.5),
            line: StrokeStyle::new(WHITE.with_alpha(0.7), 1.0),
            fibonacci: FibonacciStyle {
                level: StrokeStyle::new(WHITE.with_alpha(0.25), 1.0),
                label_color: WHITE.with_alpha(0.7),
                label_font: FontDescriptor::default(),
                label_offset: (6.0, 3.0),
            },
        }
    }
}
