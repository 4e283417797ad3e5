//! Pointer event contract between a host surface and the engine.

use serde::{Deserialize, Serialize};

/// Interaction phase of a pointer event.
///
/// The engine reacts to `Press`, `Move` and `Release`. `DoublePress` and
/// `Leave` are delivered but currently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Primary button went down; places an anchor
    Press,
    /// Pointer moved; drags the most recent anchor
    Move,
    /// Primary button came up; checks completion
    Release,
    /// Second press in quick succession
    #[serde(alias = "double-press", alias = "dblclick")]
    DoublePress,
    /// Pointer left the surface
    Leave,
}

/// A pointer event in surface-local coordinates.
///
/// `raw` carries whatever the host considers the originating interaction
/// (a backend event, a script step, ...). The engine never looks at it.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEvent<R = ()> {
    pub phase: Phase,
    pub x: f64,
    pub y: f64,
    pub raw: R,
}

impl OverlayEvent<()> {
    pub fn new(phase: Phase, x: f64, y: f64) -> Self {
        Self { phase, x, y, raw: () }
    }

    pub fn press(x: f64, y: f64) -> Self {
        Self::new(Phase::Press, x, y)
    }

    pub fn motion(x: f64, y: f64) -> Self {
        Self::new(Phase::Move, x, y)
    }

    pub fn release(x: f64, y: f64) -> Self {
        Self::new(Phase::Release, x, y)
    }
}

impl<R> OverlayEvent<R> {
    /// Builds an event that carries its originating raw interaction.
    pub fn with_raw(phase: Phase, x: f64, y: f64, raw: R) -> Self {
        Self { phase, x, y, raw }
    }
}
