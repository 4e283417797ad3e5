//! Rendering primitives and shape definitions.
//!
//! This module defines the drawable side of the annotation engine:
//! - [`Surface`]: the 2-D vector drawing capability renderers target
//! - [`Shape`]: an annotation kind plus its placed anchors
//! - [`fibonacci`]: guide level geometry for the Fibonacci tools
//! - [`CairoSurface`] and [`RecordingSurface`]: the two surface realizations

pub mod cairo_surface;
pub mod color;
pub mod fibonacci;
pub mod font;
pub mod recording;
pub mod render;
pub mod shape;
pub mod style;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::CairoSurface;
pub use color::Color;
pub use fibonacci::GuideLevel;
pub use font::FontDescriptor;
pub use recording::{DrawOp, RecordingSurface};
pub use render::{render_shape, render_shapes};
pub use shape::{Point, Shape, ShapeKind};
pub use style::{AnnotationStyle, FibonacciStyle, StrokeStyle};
pub use surface::Surface;
