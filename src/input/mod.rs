//! Pointer events, tool selection and the annotation state machine.
//!
//! A host translates raw pointer activity into [`OverlayEvent`]s in
//! surface-local coordinates and feeds them to a [`ToolManager`], which turns
//! them into draft and finalized shapes and asks the host to repaint.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{OverlayEvent, Phase};
pub use state::ToolManager;
pub use tool::ToolKind;
