//! The 2-D drawing capability the annotation engine renders through.

use super::color::Color;
use super::font::FontDescriptor;

/// Vector drawing surface used by every shape renderer.
///
/// The set is deliberately small: path construction, stroking, rectangular
/// clears, paint-state save/restore, stroke/fill colors, line width, font and
/// text. Nothing here does raster work or hit-testing. Coordinates are in the
/// surface's local pixel space, origin top-left.
///
/// Implementations decide what happens with geometry outside
/// `0..width` × `0..height`; the engine never clamps.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> f64;

    /// Surface height in pixels.
    fn height(&self) -> f64;

    /// Resets the given rectangle to fully transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Pushes the current paint state (colors, line width, font).
    fn save(&mut self);

    /// Pops the paint state pushed by the matching [`Surface::save`].
    fn restore(&mut self);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn set_fill_color(&mut self, color: Color);

    fn set_font(&mut self, font: &FontDescriptor);

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Strokes the current path with the stroke color and line width.
    fn stroke(&mut self);

    /// Draws `text` with its baseline starting at `(x, y)` using the fill color.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Clears the whole surface.
    fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, width, height);
    }
}
