//! A surface that records drawing calls instead of rasterizing them.
//!
//! Stands in for a real canvas when a host only needs to know what would be
//! drawn: the recorded operations show exactly what the renderers asked for,
//! in order.

use super::color::Color;
use super::font::FontDescriptor;
use super::surface::Surface;

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    Save,
    Restore,
    StrokeColor(Color),
    LineWidth(f64),
    FillColor(Color),
    Font(String),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    FillText { text: String, x: f64, y: f64 },
}

/// Records every [`Surface`] call made against it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// All operations recorded so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// The polylines that were actually stroked, in stroke order.
    ///
    /// Path points accumulate from `MoveTo`/`LineTo` until a `Stroke`; a
    /// `BeginPath` drops whatever was pending.
    pub fn strokes(&self) -> Vec<Vec<(f64, f64)>> {
        let mut strokes = Vec::new();
        let mut pending: Vec<(f64, f64)> = Vec::new();
        for op in &self.ops {
            match op {
                DrawOp::BeginPath => pending.clear(),
                DrawOp::MoveTo(x, y) | DrawOp::LineTo(x, y) => pending.push((*x, *y)),
                DrawOp::Stroke => {
                    if !pending.is_empty() {
                        strokes.push(pending.clone());
                    }
                }
                _ => {}
            }
        }
        strokes
    }

    /// Text drawn, as `(text, x, y)` triples in draw order.
    pub fn texts(&self) -> Vec<(String, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, x, y } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::FillColor(color));
    }

    fn set_font(&mut self, font: &FontDescriptor) {
        self.ops.push(DrawOp::Font(font.to_pango_string()));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
