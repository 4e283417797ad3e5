//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::color::SLATE;
use crate::draw::{AnnotationStyle, FibonacciStyle, FontDescriptor, StrokeStyle};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Trendline and single-anchor line appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LinesConfig {
    /// Trendline stroke color
    #[serde(default = "default_trendline_color")]
    pub trendline_color: ColorSpec,

    /// Trendline stroke width in pixels (valid range: 0.5 - 10.0)
    #[serde(default = "default_trendline_width")]
    pub trendline_width: f64,

    /// Stroke color for horizontal, vertical and ray lines
    #[serde(default = "default_line_color")]
    pub line_color: ColorSpec,

    /// Stroke width for horizontal, vertical and ray lines (valid range: 0.5 - 10.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl Default for LinesConfig {
    fn default() -> Self {
        Self {
            trendline_color: default_trendline_color(),
            trendline_width: default_trendline_width(),
            line_color: default_line_color(),
            line_width: default_line_width(),
        }
    }
}

/// Fibonacci guide and label appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FibonacciConfig {
    /// Guide line color
    #[serde(default = "default_level_color")]
    pub level_color: ColorSpec,

    /// Guide line width in pixels (valid range: 0.5 - 10.0)
    #[serde(default = "default_level_width")]
    pub level_width: f64,

    /// Label text color
    #[serde(default = "default_label_color")]
    pub label_color: ColorSpec,

    /// Label font family (e.g., "Sans", "Monospace")
    #[serde(default = "default_label_font_family")]
    pub label_font_family: String,

    /// Label font size in pixels (valid range: 6.0 - 48.0)
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,

    /// Label offset `[dx, dy]` from the guide's right end, in pixels
    #[serde(default = "default_label_offset")]
    pub label_offset: [f64; 2],
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            level_color: default_level_color(),
            level_width: default_level_width(),
            label_color: default_label_color(),
            label_font_family: default_label_font_family(),
            label_font_size: default_label_font_size(),
            label_offset: default_label_offset(),
        }
    }
}

/// Smallest surface edge, in pixels.
pub const MIN_SURFACE_SIZE: u32 = 16;
/// Largest surface edge, in pixels.
pub const MAX_SURFACE_SIZE: u32 = 8192;

/// Drawing surface used by the offline renderer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_surface_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_surface_height")]
    pub height: u32,

    /// Background painted under the annotations on export
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
            background: default_background(),
        }
    }
}

/// Where exported images go.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Output directory; `~/` is expanded
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// File name template using chrono format specifiers, without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            filename_template: default_filename_template(),
        }
    }
}

/// Builds the renderer paint settings from the line and Fibonacci sections.
pub(crate) fn annotation_style(lines: &LinesConfig, fibonacci: &FibonacciConfig) -> AnnotationStyle {
    AnnotationStyle {
        trendline: StrokeStyle::new(lines.trendline_color.to_color(), lines.trendline_width),
        line: StrokeStyle::new(lines.line_color.to_color(), lines.line_width),
        fibonacci: FibonacciStyle {
            level: StrokeStyle::new(fibonacci.level_color.to_color(), fibonacci.level_width),
            label_color: fibonacci.label_color.to_color(),
            label_font: FontDescriptor::new(
                fibonacci.label_font_family.clone(),
                "normal",
                fibonacci.label_font_size,
            ),
            label_offset: (fibonacci.label_offset[0], fibonacci.label_offset[1]),
        },
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_trendline_color() -> ColorSpec {
    ColorSpec::Rgba([1.0, 1.0, 1.0, 0.9])
}

fn default_trendline_width() -> f64 {
    1.5
}

fn default_line_color() -> ColorSpec {
    ColorSpec::Rgba([1.0, 1.0, 1.0, 0.7])
}

fn default_line_width() -> f64 {
    1.0
}

fn default_level_color() -> ColorSpec {
    ColorSpec::Rgba([1.0, 1.0, 1.0, 0.25])
}

fn default_level_width() -> f64 {
    1.0
}

fn default_label_color() -> ColorSpec {
    ColorSpec::Rgba([1.0, 1.0, 1.0, 0.7])
}

fn default_label_font_family() -> String {
    "Sans".to_string()
}

fn default_label_font_size() -> f64 {
    11.0
}

fn default_label_offset() -> [f64; 2] {
    [6.0, 3.0]
}

fn default_surface_width() -> u32 {
    800
}

fn default_surface_height() -> u32 {
    400
}

fn default_background() -> ColorSpec {
    SLATE.into()
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_filename_template() -> String {
    "chartmark_%Y-%m-%d_%H%M%S".to_string()
}
