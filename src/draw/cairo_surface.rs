//! [`Surface`] implementation on top of a Cairo context.

use super::color::{BLACK, Color};
use super::font::FontDescriptor;
use super::surface::Surface;

/// Paint state that Cairo keeps as a single "source"; tracked here so stroke
/// and fill colors can be set independently and restored together.
#[derive(Clone, Debug)]
struct PaintState {
    stroke_color: Color,
    fill_color: Color,
    line_width: f64,
    font: FontDescriptor,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stroke_color: BLACK,
            fill_color: BLACK,
            line_width: 1.0,
            font: FontDescriptor::default(),
        }
    }
}

/// Draws annotations into a Cairo context of a known pixel size.
///
/// Cairo drawing errors are sticky on the context and are ignored per call;
/// an errored context simply stops producing output.
pub struct CairoSurface {
    ctx: cairo::Context,
    width: f64,
    height: f64,
    state: PaintState,
    saved: Vec<PaintState>,
}

impl CairoSurface {
    pub fn new(ctx: cairo::Context, width: f64, height: f64) -> Self {
        Self {
            ctx,
            width,
            height,
            state: PaintState::default(),
            saved: Vec::new(),
        }
    }

    fn apply_color(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl Surface for CairoSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let _ = self.ctx.save();
        self.ctx.set_operator(cairo::Operator::Clear);
        self.ctx.new_path();
        self.ctx.rectangle(x, y, width, height);
        let _ = self.ctx.fill();
        let _ = self.ctx.restore();
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
        let _ = self.ctx.save();
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
            let _ = self.ctx.restore();
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    fn set_font(&mut self, font: &FontDescriptor) {
        self.state.font = font.clone();
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.apply_color(self.state.stroke_color);
        self.ctx.set_line_width(self.state.line_width);
        // The path survives the stroke until the next begin_path.
        let _ = self.ctx.stroke_preserve();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        // Text must not disturb a path the caller is still building.
        let pending = self.ctx.copy_path().ok();
        self.ctx.new_path();

        let layout = pangocairo::functions::create_layout(&self.ctx);
        let font_desc = pango::FontDescription::from_string(&self.state.font.to_pango_string());
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // Pango positions layouts by their top-left corner; (x, y) is the baseline.
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        self.apply_color(self.state.fill_color);
        self.ctx.move_to(x, y - baseline);
        pangocairo::functions::show_layout(&self.ctx, &layout);

        self.ctx.new_path();
        if let Some(path) = pending {
            self.ctx.append_path(&path);
        }
    }
}
