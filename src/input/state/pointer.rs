use crate::draw::{Point, Shape, ShapeKind};
use log::trace;

use super::ToolManager;

impl ToolManager {
    /// Places an anchor, starting a draft of `kind` if none exists.
    pub(super) fn on_press(&mut self, kind: ShapeKind, x: f64, y: f64) {
        let point = Point::new(x, y);
        match self.draft_mut() {
            Some(draft) => draft.place_anchor(point),
            None => {
                trace!("Starting {:?} draft at ({}, {})", kind, x, y);
                let mut shape = Shape::new(kind);
                shape.place_anchor(point);
                self.start_draft(shape);
            }
        }
        self.request_redraw();
    }

    /// Rubber-bands the draft's most recent anchor.
    pub(super) fn on_move(&mut self, x: f64, y: f64) {
        let Some(draft) = self.draft_mut() else {
            return;
        };
        draft.drag_last_anchor(Point::new(x, y));
        self.request_redraw();
    }

    /// Finalizes the draft once its anchor quota is met.
    pub(super) fn on_release(&mut self) {
        let Some(draft) = self.draft_mut() else {
            return;
        };
        if draft.is_complete() {
            self.finalize_draft();
        }
        self.request_redraw();
    }
}
