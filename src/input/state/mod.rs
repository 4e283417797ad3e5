mod core;
mod pointer;

pub use core::{RedrawHandler, ToolManager};
