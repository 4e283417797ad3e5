//! Cairo-backed overlay host.
//!
//! Owns the drawing surface, translates client coordinates into
//! surface-local ones, feeds the [`ToolManager`] and repaints whenever the
//! engine asks for it.

use super::script::{Script, Step};
use crate::config::{
    Action, Config, KeyBinding, MAX_SURFACE_SIZE, MIN_SURFACE_SIZE, OutputConfig, lookup_action,
};
use crate::draw::{CairoSurface, Color};
use crate::input::{OverlayEvent, Phase, ToolKind, ToolManager};
use crate::util;
use cairo::{Context, Format, ImageSurface};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while hosting or exporting the overlay.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid keybinding configuration: {0}")]
    Keybindings(String),

    #[error("Invalid key in script: {0}")]
    InvalidKey(String),

    #[error("Invalid filename template: {0}")]
    InvalidTemplate(String),
}

/// Placement of the drawing surface inside the client area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: u32,
    pub height: u32,
}

impl SurfaceBounds {
    pub fn new(left: f64, top: f64, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounds anchored at the client origin.
    pub fn sized(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Converts client coordinates into surface-local ones.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

/// The untranslated interaction behind an [`OverlayEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPointer {
    pub client_x: f64,
    pub client_y: f64,
    /// Monotonic per-overlay event counter
    pub sequence: u64,
}

/// A drawing surface wired to an annotation engine.
pub struct Overlay {
    image: ImageSurface,
    surface: CairoSurface,
    bounds: SurfaceBounds,
    manager: ToolManager,
    action_map: HashMap<KeyBinding, Action>,
    background: Color,
    sequence: u64,
    frames: u64,
    last_event: Option<OverlayEvent<RawPointer>>,
}

impl Overlay {
    /// Creates an overlay styled and keyed from `config`.
    pub fn new(config: &Config, bounds: SurfaceBounds) -> Result<Self, HostError> {
        let (width, height) = (bounds.width, bounds.height);
        let invalid = || HostError::InvalidSize { width, height };
        let valid = MIN_SURFACE_SIZE..=MAX_SURFACE_SIZE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(invalid());
        }
        let image = ImageSurface::create(
            Format::ARgb32,
            i32::try_from(width).map_err(|_| invalid())?,
            i32::try_from(height).map_err(|_| invalid())?,
        )?;
        let ctx = Context::new(&image)?;
        let surface = CairoSurface::new(ctx, f64::from(width), f64::from(height));

        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(HostError::Keybindings)?;

        log::debug!(
            "Overlay {}x{} at ({}, {})",
            width,
            height,
            bounds.left,
            bounds.top
        );

        Ok(Self {
            image,
            surface,
            bounds,
            manager: ToolManager::new(config.annotation_style()),
            action_map,
            background: config.background(),
            sequence: 0,
            frames: 0,
            last_event: None,
        })
    }

    pub fn manager(&self) -> &ToolManager {
        &self.manager
    }

    /// Number of repaints performed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The most recent event handed to the engine.
    pub fn last_event(&self) -> Option<&OverlayEvent<RawPointer>> {
        self.last_event.as_ref()
    }

    /// Delivers a pointer interaction given in client coordinates.
    pub fn pointer(&mut self, phase: Phase, client_x: f64, client_y: f64) {
        self.sequence += 1;
        let (x, y) = self.bounds.to_local(client_x, client_y);
        let event = OverlayEvent::with_raw(
            phase,
            x,
            y,
            RawPointer {
                client_x,
                client_y,
                sequence: self.sequence,
            },
        );
        self.manager.handle_event(&event);
        self.last_event = Some(event);
        self.repaint_if_needed();
    }

    pub fn select_tool(&mut self, tool: ToolKind) {
        self.manager.select_tool(tool);
        self.repaint_if_needed();
    }

    pub fn clear_all(&mut self) {
        self.manager.clear_all();
        self.repaint_if_needed();
    }

    /// Resolves a key press through the keybindings and applies the action.
    ///
    /// Returns the action that fired, if any key binding matched.
    pub fn key_press(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool) -> Option<Action> {
        let action = lookup_action(&self.action_map, key, ctrl, shift, alt)?;
        log::debug!("Key {} -> {:?}", key, action);
        self.manager.apply_action(action);
        self.repaint_if_needed();
        Some(action)
    }

    /// Repaints the surface if the engine requested it since the last frame.
    pub fn repaint_if_needed(&mut self) -> bool {
        if !self.manager.take_redraw() {
            return false;
        }
        self.manager.render_all(&mut self.surface);
        self.frames += 1;
        true
    }

    /// Feeds every step of `script` to the engine in order.
    pub fn run_script(&mut self, script: &Script) -> Result<(), HostError> {
        for step in &script.steps {
            match step {
                Step::Select { tool } => self.select_tool(*tool),
                Step::Press { x, y } => self.pointer(Phase::Press, *x, *y),
                Step::Move { x, y } => self.pointer(Phase::Move, *x, *y),
                Step::Release { x, y } => self.pointer(Phase::Release, *x, *y),
                Step::DoublePress { x, y } => self.pointer(Phase::DoublePress, *x, *y),
                Step::Leave { x, y } => self.pointer(Phase::Leave, *x, *y),
                Step::Clear => self.clear_all(),
                Step::Key { key } => {
                    let binding = KeyBinding::parse(key).map_err(HostError::InvalidKey)?;
                    if self
                        .key_press(&binding.key, binding.ctrl, binding.shift, binding.alt)
                        .is_none()
                    {
                        log::warn!("No action bound to '{}'", key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Writes the annotations composited over the background to `path`.
    pub fn export_png(&mut self, path: &Path) -> Result<(), HostError> {
        // Pick up any state change that has not been painted yet.
        self.repaint_if_needed();
        self.image.flush();

        let output = ImageSurface::create(Format::ARgb32, self.image.width(), self.image.height())?;
        {
            let ctx = Context::new(&output)?;
            let bg = self.background;
            ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
            ctx.paint()?;
            ctx.set_source_surface(&self.image, 0.0, 0.0)?;
            ctx.paint()?;
        }

        let mut file = File::create(path)?;
        output.write_to_png(&mut file)?;
        log::info!("Exported annotations to {}", path.display());
        Ok(())
    }

    /// Exports into the configured output directory with a timestamped name.
    pub fn export_to_directory(&mut self, output: &OutputConfig) -> Result<PathBuf, HostError> {
        let directory = util::expand_tilde(&output.directory);
        if !directory.exists() {
            log::info!("Creating output directory: {}", directory.display());
            fs::create_dir_all(&directory)?;
        }
        let filename = util::generate_filename(&output.filename_template, "png")
            .ok_or_else(|| HostError::InvalidTemplate(output.filename_template.clone()))?;
        let path = directory.join(filename);
        self.export_png(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ShapeKind;

    fn overlay(bounds: SurfaceBounds) -> Overlay {
        Overlay::new(&Config::default(), bounds).unwrap()
    }

    #[test]
    fn to_local_subtracts_origin() {
        let bounds = SurfaceBounds::new(100.0, 40.0, 800, 400);
        assert_eq!(bounds.to_local(110.0, 60.0), (10.0, 20.0));
        assert_eq!(bounds.to_local(50.0, 0.0), (-50.0, -40.0));
    }

    #[test]
    fn rejects_empty_surface() {
        let result = Overlay::new(&Config::default(), SurfaceBounds::sized(0, 10));
        assert!(matches!(
            result,
            Err(HostError::InvalidSize {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn pointer_events_are_translated_and_carry_raw() {
        let mut overlay = overlay(SurfaceBounds::new(20.0, 10.0, 200, 100));
        overlay.select_tool(ToolKind::Horizontal);
        overlay.pointer(Phase::Press, 25.0, 30.0);

        let event = overlay.last_event().unwrap();
        assert_eq!((event.x, event.y), (5.0, 20.0));
        assert_eq!(event.raw.client_x, 25.0);
        assert_eq!(event.raw.sequence, 1);

        overlay.pointer(Phase::Release, 25.0, 30.0);
        let finalized = overlay.manager().finalized();
        assert_eq!(finalized.len(), 1);
        assert_eq!(finalized[0].kind(), ShapeKind::Horizontal);
        assert_eq!(finalized[0].anchors()[0].y, 20.0);
    }

    #[test]
    fn repaints_only_when_requested() {
        let mut overlay = overlay(SurfaceBounds::sized(100, 100));
        overlay.pointer(Phase::Press, 1.0, 1.0);
        assert_eq!(overlay.frames(), 0);

        overlay.select_tool(ToolKind::Trendline);
        overlay.pointer(Phase::Press, 1.0, 1.0);
        overlay.pointer(Phase::Leave, 1.0, 1.0);
        assert_eq!(overlay.frames(), 2);
        assert!(!overlay.repaint_if_needed());
    }

    #[test]
    fn keys_map_to_actions() {
        let mut overlay = overlay(SurfaceBounds::sized(100, 100));
        assert_eq!(
            overlay.key_press("f", false, true, false),
            Some(Action::SelectFibExtension)
        );
        assert_eq!(overlay.manager().active_tool(), ToolKind::FibExtension);
        assert_eq!(overlay.key_press("q", false, false, false), None);
    }

    #[test]
    fn script_runs_in_order() {
        let script = Script::parse(
            r#"
            [[step]]
            action = "key"
            key = "T"

            [[step]]
            action = "press"
            x = 10.0
            y = 10.0

            [[step]]
            action = "release"

            [[step]]
            action = "move"
            x = 50.0
            y = 50.0

            [[step]]
            action = "press"
            x = 80.0
            y = 80.0

            [[step]]
            action = "release"
            "#,
        )
        .unwrap();

        let mut overlay = overlay(SurfaceBounds::sized(100, 100));
        overlay.run_script(&script).unwrap();
        let manager = overlay.manager();
        assert_eq!(manager.finalized().len(), 1);
        assert_eq!(manager.active_tool(), ToolKind::Trendline);
        assert!(manager.draft().is_none());
    }

    #[test]
    fn script_with_bad_key_fails() {
        let script = Script::parse("[[step]]\naction = \"key\"\nkey = \"Ctrl+\"").unwrap();
        let mut overlay = overlay(SurfaceBounds::sized(32, 32));
        assert!(matches!(
            overlay.run_script(&script),
            Err(HostError::InvalidKey(_))
        ));
    }

    #[test]
    fn rejects_oversized_surface() {
        let result = Overlay::new(&Config::default(), SurfaceBounds::sized(100_000, 100));
        assert!(matches!(result, Err(HostError::InvalidSize { .. })));
        assert!(Overlay::new(&Config::default(), SurfaceBounds::sized(16, 8192)).is_ok());
    }

    #[test]
    fn export_rejects_unknown_template_specifier() {
        let dir = tempfile::tempdir().unwrap();
        let mut overlay = overlay(SurfaceBounds::sized(64, 32));
        let output = OutputConfig {
            directory: dir.path().to_string_lossy().into_owned(),
            filename_template: "shot_%Q".to_string(),
        };
        assert!(matches!(
            overlay.export_to_directory(&output),
            Err(HostError::InvalidTemplate(template)) if template == "shot_%Q"
        ));
    }

    #[test]
    fn export_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut overlay = overlay(SurfaceBounds::sized(64, 32));
        overlay.select_tool(ToolKind::Vertical);
        overlay.pointer(Phase::Press, 10.0, 10.0);
        overlay.pointer(Phase::Release, 10.0, 10.0);

        let output = OutputConfig {
            directory: dir.path().join("nested").to_string_lossy().into_owned(),
            filename_template: "frame".to_string(),
        };
        let path = overlay.export_to_directory(&output).unwrap();
        assert_eq!(path.file_name().unwrap(), "frame.png");

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
