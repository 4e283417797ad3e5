//! Configuration file support for chartmark.
//!
//! Settings are read from `~/.config/chartmark/config.toml`: line and
//! Fibonacci styling, the offline render surface, export location and
//! keybindings. Every section is optional; missing values use defaults.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig, lookup_action};
pub use types::{
    FibonacciConfig, LinesConfig, MAX_SURFACE_SIZE, MIN_SURFACE_SIZE, OutputConfig, SurfaceConfig,
};

use crate::draw::{AnnotationStyle, Color};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "chartmark";

/// Root configuration structure.
///
/// # Example TOML
/// ```toml
/// [lines]
/// trendline_color = "white"
/// trendline_width = 2.0
///
/// [fibonacci]
/// level_color = [1.0, 1.0, 1.0, 0.3]
/// label_font_size = 12.0
///
/// [surface]
/// width = 1280
/// height = 720
///
/// [keybindings]
/// select_trendline = ["T", "Ctrl+T"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Trendline and single-anchor line styling
    #[serde(default)]
    pub lines: LinesConfig,

    /// Fibonacci guide and label styling
    #[serde(default)]
    pub fibonacci: FibonacciConfig,

    /// Offline render surface
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Export location
    #[serde(default)]
    pub output: OutputConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps configuration values to usable ranges.
    ///
    /// Each corrected value logs a warning. Validated ranges:
    /// - stroke widths: 0.5 - 10.0
    /// - `label_font_size`: 6.0 - 48.0
    /// - surface `width`/`height`: 16 - 8192
    /// - RGBA color components: 0.0 - 1.0
    fn validate_and_clamp(&mut self) {
        let widths = [
            ("trendline_width", &mut self.lines.trendline_width),
            ("line_width", &mut self.lines.line_width),
            ("level_width", &mut self.fibonacci.level_width),
        ];
        let default_widths = [
            LinesConfig::default().trendline_width,
            LinesConfig::default().line_width,
            FibonacciConfig::default().level_width,
        ];
        for ((name, width), default) in widths.into_iter().zip(default_widths) {
            if width.is_nan() {
                log::warn!("Invalid {} NaN, using default {:.1}", name, default);
                *width = default;
            } else if !(0.5..=10.0).contains(&*width) {
                log::warn!("Invalid {} {:.1}, clamping to 0.5-10.0 range", name, width);
                *width = width.clamp(0.5, 10.0);
            }
        }

        if self.fibonacci.label_font_size.is_nan() {
            log::warn!("Invalid label_font_size NaN, using the default");
            self.fibonacci.label_font_size = FibonacciConfig::default().label_font_size;
        } else if !(6.0..=48.0).contains(&self.fibonacci.label_font_size) {
            log::warn!(
                "Invalid label_font_size {:.1}, clamping to 6.0-48.0 range",
                self.fibonacci.label_font_size
            );
            self.fibonacci.label_font_size = self.fibonacci.label_font_size.clamp(6.0, 48.0);
        }

        if self.fibonacci.label_font_family.trim().is_empty() {
            log::warn!("Empty label_font_family, falling back to 'Sans'");
            self.fibonacci.label_font_family = "Sans".to_string();
        }

        for (name, dimension) in [
            ("surface width", &mut self.surface.width),
            ("surface height", &mut self.surface.height),
        ] {
            if !(MIN_SURFACE_SIZE..=MAX_SURFACE_SIZE).contains(&*dimension) {
                log::warn!(
                    "Invalid {} {}, clamping to {}-{} range",
                    name,
                    dimension,
                    MIN_SURFACE_SIZE,
                    MAX_SURFACE_SIZE
                );
                *dimension = (*dimension).clamp(MIN_SURFACE_SIZE, MAX_SURFACE_SIZE);
            }
        }

        self.lines.trendline_color.clamp_in_place("trendline_color");
        self.lines.line_color.clamp_in_place("line_color");
        self.fibonacci.level_color.clamp_in_place("level_color");
        self.fibonacci.label_color.clamp_in_place("label_color");
        self.surface.background.clamp_in_place("background");

        if self.output.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, falling back to the default");
            self.output.filename_template = OutputConfig::default().filename_template;
        } else if !crate::util::is_valid_template(&self.output.filename_template) {
            log::warn!(
                "Invalid filename_template '{}', falling back to the default",
                self.output.filename_template
            );
            self.output.filename_template = OutputConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join(APP_DIR);

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the user configuration, or defaults if no file exists.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists, or the directory or
    /// file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// Renderer paint settings derived from the `[lines]` and `[fibonacci]` sections.
    pub fn annotation_style(&self) -> AnnotationStyle {
        types::annotation_style(&self.lines, &self.fibonacci)
    }

    /// Background color composited under the annotations on export.
    pub fn background(&self) -> Color {
        self.surface.background.to_color()
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_builtin_style() {
        let config = Config::default();
        assert_eq!(config.annotation_style(), AnnotationStyle::default());
        assert_eq!(config.surface.width, 800);
        assert_eq!(config.surface.height, 400);
    }

    #[test]
    fn example_config_parses_to_defaults() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.annotation_style(), AnnotationStyle::default());
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn load_from_clamps_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[lines]\ntrendline_width = 40.0\nline_color = [2.0, 0.5, 0.5, 1.0]\n\
             [fibonacci]\nlabel_font_size = 2.0\n[surface]\nwidth = 4"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.lines.trendline_width, 10.0);
        assert_eq!(config.lines.line_color, ColorSpec::Rgba([1.0, 0.5, 0.5, 1.0]));
        assert_eq!(config.fibonacci.label_font_size, 6.0);
        assert_eq!(config.surface.width, 16);
        assert_eq!(config.surface.height, 400);
    }

    #[test]
    fn load_from_replaces_nan_and_bad_template() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[lines]\nline_width = nan\n[fibonacci]\nlabel_font_size = nan\n\
             [output]\nfilename_template = \"shot_%Q\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.lines.line_width, LinesConfig::default().line_width);
        assert_eq!(
            config.fibonacci.label_font_size,
            FibonacciConfig::default().label_font_size
        );
        assert_eq!(
            config.output.filename_template,
            OutputConfig::default().filename_template
        );
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[lines\ntrendline_width = ").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn style_uses_configured_values() {
        let config: Config = toml::from_str(
            "[fibonacci]\nlabel_font_family = \"Monospace\"\nlabel_offset = [4.0, -2.0]\n\
             [lines]\ntrendline_color = \"red\"",
        )
        .unwrap();
        let style = config.annotation_style();
        assert_eq!(style.fibonacci.label_font.family, "Monospace");
        assert_eq!(style.fibonacci.label_offset, (4.0, -2.0));
        assert_eq!(style.trendline.color, crate::draw::color::RED);
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["lines", "fibonacci", "surface", "output", "keybindings"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
