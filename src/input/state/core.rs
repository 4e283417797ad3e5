//! Tool selection and draft/finalized shape state.

use crate::config::Action;
use crate::draw::{AnnotationStyle, Shape, Surface, render_shape};
use crate::input::events::{OverlayEvent, Phase};
use crate::input::tool::ToolKind;
use log::debug;
use std::fmt;

/// Callback invoked whenever the engine wants the host to repaint.
pub type RedrawHandler = Box<dyn FnMut()>;

/// The annotation engine.
///
/// Holds the active tool, at most one shape under construction (the draft)
/// and the completed shapes in z-order. All pointer interaction goes through
/// [`ToolManager::handle_event`]; the host repaints through
/// [`ToolManager::render_all`] whenever a redraw was requested.
pub struct ToolManager {
    /// Currently selected tool
    active_tool: ToolKind,
    /// Shape under construction, if any
    draft: Option<Shape>,
    /// Completed shapes; insertion order is paint order
    finalized: Vec<Shape>,
    /// Stroke and label styling used by `render_all`
    style: AnnotationStyle,
    /// Whether a repaint has been requested since the last `take_redraw`
    pub needs_redraw: bool,
    redraw_handler: Option<RedrawHandler>,
}

impl ToolManager {
    pub fn new(style: AnnotationStyle) -> Self {
        Self {
            active_tool: ToolKind::None,
            draft: None,
            finalized: Vec::new(),
            style,
            needs_redraw: false,
            redraw_handler: None,
        }
    }

    /// Registers a callback fired on every redraw request.
    pub fn set_redraw_handler(&mut self, handler: impl FnMut() + 'static) {
        self.redraw_handler = Some(Box::new(handler));
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn draft(&self) -> Option<&Shape> {
        self.draft.as_ref()
    }

    pub fn finalized(&self) -> &[Shape] {
        &self.finalized
    }

    /// Whether a draft is currently under construction.
    pub fn is_building(&self) -> bool {
        self.draft.is_some()
    }

    pub fn style(&self) -> &AnnotationStyle {
        &self.style
    }

    /// Reads and clears the pending redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub(super) fn request_redraw(&mut self) {
        self.needs_redraw = true;
        if let Some(handler) = self.redraw_handler.as_mut() {
            handler();
        }
    }

    /// Arms `tool` and drops any draft, including one of the same kind.
    pub fn select_tool(&mut self, tool: ToolKind) {
        if self.active_tool != tool {
            debug!("Tool switched: {} -> {}", self.active_tool, tool);
        }
        self.active_tool = tool;
        self.discard_draft();
        self.request_redraw();
    }

    /// Removes every finalized shape and the draft.
    pub fn clear_all(&mut self) {
        if !self.finalized.is_empty() {
            debug!("Clearing {} finalized shape(s)", self.finalized.len());
        }
        self.finalized.clear();
        self.discard_draft();
        self.request_redraw();
    }

    fn discard_draft(&mut self) {
        if let Some(draft) = self.draft.take() {
            debug!(
                "Discarded {:?} draft with {}/{} anchors",
                draft.kind(),
                draft.anchors().len(),
                draft.required_anchor_count()
            );
        }
    }

    /// Feeds one pointer event into the state machine.
    ///
    /// The raw payload is ignored. Nothing happens while the active tool is
    /// [`ToolKind::None`].
    pub fn handle_event<R>(&mut self, event: &OverlayEvent<R>) {
        let Some(kind) = self.active_tool.shape_kind() else {
            return;
        };

        match event.phase {
            Phase::Press => self.on_press(kind, event.x, event.y),
            Phase::Move => self.on_move(event.x, event.y),
            Phase::Release => self.on_release(),
            Phase::DoublePress | Phase::Leave => {}
        }
    }

    /// Applies a keyboard action.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::ClearAll => self.clear_all(),
            select => {
                if let Some(tool) = select.tool() {
                    self.select_tool(tool);
                }
            }
        }
    }

    /// Clears `surface` and paints finalized shapes, then the draft on top.
    pub fn render_all<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for shape in self.finalized.iter().chain(self.draft.iter()) {
            render_shape(surface, shape, &self.style);
        }
    }

    pub(super) fn draft_mut(&mut self) -> Option<&mut Shape> {
        self.draft.as_mut()
    }

    pub(super) fn start_draft(&mut self, shape: Shape) {
        self.draft = Some(shape);
    }

    /// Moves a complete draft into `finalized`, reverting non-sticky tools.
    pub(super) fn finalize_draft(&mut self) {
        let Some(shape) = self.draft.take() else {
            return;
        };
        let kind = shape.kind();
        self.finalized.push(shape);
        debug!(
            "Finalized {:?} (total {})",
            kind,
            self.finalized.len()
        );

        if !kind.is_sticky() {
            debug!("Tool switched: {} -> {}", self.active_tool, ToolKind::None);
            self.active_tool = ToolKind::None;
        }
    }
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new(AnnotationStyle::default())
    }
}

impl fmt::Debug for ToolManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolManager")
            .field("active_tool", &self.active_tool)
            .field("draft", &self.draft)
            .field("finalized", &self.finalized.len())
            .field("needs_redraw", &self.needs_redraw)
            .field("redraw_handler", &self.redraw_handler.is_some())
            .finish()
    }
}
