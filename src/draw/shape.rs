//! Shape definitions for chart annotations.

use serde::{Deserialize, Serialize};

/// A position in the drawing surface's local pixel space.
///
/// There is no price/time meaning attached; annotations stay where they were
/// drawn on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The closed set of drawable annotation kinds.
///
/// Each kind fixes how many anchors make it complete and whether the tool that
/// draws it stays selected afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Straight segment between two anchors
    Trendline,
    /// Full-width line at the anchor's y
    Horizontal,
    /// Full-height line at the anchor's x
    Vertical,
    /// Half-line from the anchor to the right edge
    Ray,
    /// Retracement guides between two swing points
    FibRetracement,
    /// Extension guides projected from a third anchor
    FibExtension,
    /// Projection guides measured from the B→C leg
    FibProjection,
}

impl ShapeKind {
    /// Number of anchors a shape of this kind needs to be complete.
    pub const fn required_anchor_count(self) -> usize {
        match self {
            ShapeKind::Trendline => 2,
            ShapeKind::Horizontal => 1,
            ShapeKind::Vertical => 1,
            ShapeKind::Ray => 1,
            ShapeKind::FibRetracement => 2,
            ShapeKind::FibExtension => 3,
            ShapeKind::FibProjection => 3,
        }
    }

    /// Sticky kinds keep their tool selected after a shape completes.
    pub const fn is_sticky(self) -> bool {
        matches!(
            self,
            ShapeKind::Trendline
                | ShapeKind::FibRetracement
                | ShapeKind::FibExtension
                | ShapeKind::FibProjection
        )
    }

    /// Whether `anchors` satisfies this kind's anchor quota.
    pub fn is_complete(self, anchors: &[Point]) -> bool {
        anchors.len() >= self.required_anchor_count()
    }
}

/// A drawable annotation: its kind plus the anchors placed so far.
///
/// The anchor list never grows past the kind's quota. Fields are private so the
/// only mutations are the placement operations the tool manager drives.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    kind: ShapeKind,
    anchors: Vec<Point>,
}

impl Shape {
    /// Creates an empty shape of the given kind.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            anchors: Vec::with_capacity(kind.required_anchor_count()),
        }
    }

    /// Creates a shape from a list of anchors, dropping any beyond the quota.
    pub fn with_anchors(kind: ShapeKind, anchors: impl IntoIterator<Item = Point>) -> Self {
        let anchors = anchors
            .into_iter()
            .take(kind.required_anchor_count())
            .collect();
        Self { kind, anchors }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    pub fn required_anchor_count(&self) -> usize {
        self.kind.required_anchor_count()
    }

    pub fn is_complete(&self) -> bool {
        self.kind.is_complete(&self.anchors)
    }

    /// Fixes a new anchor at `point`.
    ///
    /// When the quota is already met the most recent anchor is moved instead,
    /// so a press that follows a lost release cannot overflow the shape.
    pub(crate) fn place_anchor(&mut self, point: Point) {
        if self.is_complete() {
            if let Some(last) = self.anchors.last_mut() {
                *last = point;
            }
        } else {
            self.anchors.push(point);
        }
    }

    /// Rubber-bands the most recent anchor to `point`. No-op without anchors.
    pub(crate) fn drag_last_anchor(&mut self, point: Point) {
        if let Some(last) = self.anchors.last_mut() {
            *last = point;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ShapeKind; 7] = [
        ShapeKind::Trendline,
        ShapeKind::Horizontal,
        ShapeKind::Vertical,
        ShapeKind::Ray,
        ShapeKind::FibRetracement,
        ShapeKind::FibExtension,
        ShapeKind::FibProjection,
    ];

    #[test]
    fn required_anchor_counts_match_table() {
        let expected = [2, 1, 1, 1, 2, 3, 3];
        for (kind, count) in ALL_KINDS.into_iter().zip(expected) {
            assert_eq!(kind.required_anchor_count(), count, "{kind:?}");
        }
    }

    #[test]
    fn is_complete_tracks_quota() {
        for kind in ALL_KINDS {
            let required = kind.required_anchor_count();
            for len in 0..=required + 1 {
                let anchors = vec![Point::new(1.0, 2.0); len];
                assert_eq!(kind.is_complete(&anchors), len >= required, "{kind:?} with {len}");
            }
        }
    }

    #[test]
    fn stickiness_matches_table() {
        let sticky: Vec<_> = ALL_KINDS.into_iter().filter(|k| k.is_sticky()).collect();
        assert_eq!(
            sticky,
            vec![
                ShapeKind::Trendline,
                ShapeKind::FibRetracement,
                ShapeKind::FibExtension,
                ShapeKind::FibProjection
            ]
        );
    }

    #[test]
    fn place_anchor_never_exceeds_quota() {
        let mut shape = Shape::new(ShapeKind::Trendline);
        shape.place_anchor(Point::new(0.0, 0.0));
        shape.place_anchor(Point::new(10.0, 10.0));
        shape.place_anchor(Point::new(20.0, 30.0));

        assert_eq!(
            shape.anchors(),
            &[Point::new(0.0, 0.0), Point::new(20.0, 30.0)]
        );
        assert!(shape.is_complete());
    }

    #[test]
    fn drag_without_anchors_is_noop() {
        let mut shape = Shape::new(ShapeKind::Vertical);
        shape.drag_last_anchor(Point::new(5.0, 5.0));
        assert!(shape.anchors().is_empty());
    }

    #[test]
    fn with_anchors_truncates() {
        let shape = Shape::with_anchors(
            ShapeKind::Horizontal,
            [Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
        );
        assert_eq!(shape.anchors(), &[Point::new(1.0, 1.0)]);
    }
}
