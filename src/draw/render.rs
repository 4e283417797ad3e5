//! Rendering functions for annotation shapes.
//!
//! Every function takes the shape's anchors as they are right now, which for a
//! draft may be fewer than the kind needs. Renderers draw nothing until they
//! have the anchors their geometry requires.

use super::fibonacci::{self, GuideLevel};
use super::shape::{Point, Shape, ShapeKind};
use super::style::{AnnotationStyle, FibonacciStyle, StrokeStyle};
use super::surface::Surface;

/// Renders all shapes in order; the first shape ends up bottom-most.
pub fn render_shapes<'a, S, I>(surface: &mut S, shapes: I, style: &AnnotationStyle)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a Shape>,
{
    for shape in shapes {
        render_shape(surface, shape, style);
    }
}

/// Renders a single shape, dispatching on its kind.
pub fn render_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape, style: &AnnotationStyle) {
    let anchors = shape.anchors();
    match shape.kind() {
        ShapeKind::Trendline => render_trendline(surface, anchors, style.trendline),
        ShapeKind::Horizontal => render_horizontal(surface, anchors, style.line),
        ShapeKind::Vertical => render_vertical(surface, anchors, style.line),
        ShapeKind::Ray => render_ray(surface, anchors, style.line),
        kind @ (ShapeKind::FibRetracement | ShapeKind::FibExtension | ShapeKind::FibProjection) => {
            let levels = fibonacci::guide_levels(kind, anchors);
            render_guide_levels(surface, &levels, &style.fibonacci);
        }
    }
}

/// Strokes one straight segment with its own paint state.
fn stroke_segment<S: Surface + ?Sized>(surface: &mut S, from: Point, to: Point, stroke: StrokeStyle) {
    surface.save();
    surface.set_stroke_color(stroke.color);
    surface.set_line_width(stroke.width);

    surface.begin_path();
    surface.move_to(from.x, from.y);
    surface.line_to(to.x, to.y);
    surface.stroke();

    surface.restore();
}

/// Segment between anchor 0 and anchor 1
fn render_trendline<S: Surface + ?Sized>(surface: &mut S, anchors: &[Point], stroke: StrokeStyle) {
    if let [p0, p1, ..] = anchors {
        stroke_segment(surface, *p0, *p1, stroke);
    }
}

/// Full-width line through anchor 0
fn render_horizontal<S: Surface + ?Sized>(surface: &mut S, anchors: &[Point], stroke: StrokeStyle) {
    let Some(p) = anchors.first() else {
        return;
    };
    let width = surface.width();
    stroke_segment(surface, Point::new(0.0, p.y), Point::new(width, p.y), stroke);
}

/// Full-height line through anchor 0
fn render_vertical<S: Surface + ?Sized>(surface: &mut S, anchors: &[Point], stroke: StrokeStyle) {
    let Some(p) = anchors.first() else {
        return;
    };
    let height = surface.height();
    stroke_segment(surface, Point::new(p.x, 0.0), Point::new(p.x, height), stroke);
}

/// Horizontal half-line from anchor 0 to the right edge
fn render_ray<S: Surface + ?Sized>(surface: &mut S, anchors: &[Point], stroke: StrokeStyle) {
    let Some(p) = anchors.first() else {
        return;
    };
    let width = surface.width();
    stroke_segment(surface, *p, Point::new(width, p.y), stroke);
}

/// Draws labelled horizontal guides. An empty slice draws nothing at all.
pub fn render_guide_levels<S: Surface + ?Sized>(
    surface: &mut S,
    levels: &[GuideLevel],
    style: &FibonacciStyle,
) {
    if levels.is_empty() {
        return;
    }

    surface.save();
    surface.set_line_width(style.level.width);
    surface.set_font(&style.label_font);

    let (dx, dy) = style.label_offset;
    for level in levels {
        surface.set_stroke_color(style.level.color);
        surface.begin_path();
        surface.move_to(level.x_start, level.y);
        surface.line_to(level.x_end, level.y);
        surface.stroke();

        surface.set_fill_color(style.label_color);
        surface.fill_text(&level.label, level.x_end + dx, level.y + dy);
    }

    surface.restore();
}
