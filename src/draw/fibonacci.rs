//! Fibonacci guide level geometry.
//!
//! All three tools produce horizontal guides computed purely from the anchors'
//! pixel coordinates. The computations are kept separate from drawing so they
//! can be inspected without a surface.

use super::shape::{Point, ShapeKind};

/// Retracement ratios, drawn between the two swing anchors.
pub const RETRACEMENT_RATIOS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

/// Extension ratios, applied to the A→B leg from anchor C.
pub const EXTENSION_RATIOS: [f64; 6] = [0.618, 1.0, 1.272, 1.618, 2.0, 2.618];

/// Projection ratios, applied to the B→C leg from anchor B.
pub const PROJECTION_RATIOS: [f64; 5] = [1.0, 1.272, 1.618, 2.0, 2.618];

/// One horizontal guide of a Fibonacci shape.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideLevel {
    pub ratio: f64,
    /// Vertical position of the guide
    pub y: f64,
    /// Horizontal start of the guide
    pub x_start: f64,
    /// Horizontal end of the guide; labels are placed relative to this x
    pub x_end: f64,
    pub label: String,
}

/// Retracement guides between swing points `a` and `b`.
///
/// The 0 ratio sits on the lower point of the swing (larger y) and 1 on the
/// upper one, regardless of the order the anchors were placed in.
pub fn retracement_levels(a: Point, b: Point) -> Vec<GuideLevel> {
    let min_y = a.y.min(b.y);
    let max_y = a.y.max(b.y);

    RETRACEMENT_RATIOS
        .iter()
        .map(|&ratio| GuideLevel {
            ratio,
            y: max_y - (max_y - min_y) * ratio,
            x_start: a.x,
            x_end: b.x,
            label: format!("{:.1}%", ratio * 100.0),
        })
        .collect()
}

/// Extension guides: the A→B span projected from `c`.
pub fn extension_levels(a: Point, b: Point, c: Point) -> Vec<GuideLevel> {
    let span = b.y - a.y;

    EXTENSION_RATIOS
        .iter()
        .map(|&ratio| GuideLevel {
            ratio,
            y: c.y + span * ratio,
            x_start: a.x,
            x_end: c.x,
            label: format!("FE {ratio}"),
        })
        .collect()
}

/// Projection guides: the B→C span measured back from `b`.
pub fn projection_levels(a: Point, b: Point, c: Point) -> Vec<GuideLevel> {
    let span = c.y - b.y;

    PROJECTION_RATIOS
        .iter()
        .map(|&ratio| GuideLevel {
            ratio,
            y: b.y - span * ratio,
            x_start: a.x,
            x_end: c.x,
            label: format!("FP {ratio}"),
        })
        .collect()
}

/// Guide levels for a Fibonacci kind, or nothing when the anchors are not all
/// placed yet or the kind has no guides.
pub fn guide_levels(kind: ShapeKind, anchors: &[Point]) -> Vec<GuideLevel> {
    match (kind, anchors) {
        (ShapeKind::FibRetracement, [a, b, ..]) => retracement_levels(*a, *b),
        (ShapeKind::FibExtension, [a, b, c, ..]) => extension_levels(*a, *b, *c),
        (ShapeKind::FibProjection, [a, b, c, ..]) => projection_levels(*a, *b, *c),
        _ => Vec::new(),
    }
}
