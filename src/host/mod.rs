//! Hosting the engine on a concrete drawing surface.
//!
//! [`Overlay`] plays the surface-adapter role: it owns a Cairo image surface,
//! turns client-space pointer input into [`OverlayEvent`](crate::input::OverlayEvent)s
//! and repaints on request. [`Script`] replays recorded interactions through it.

pub mod overlay;
pub mod script;

pub use overlay::{HostError, Overlay, RawPointer, SurfaceBounds};
pub use script::{Script, ScriptError, ScriptSurface, Step};
