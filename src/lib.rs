//! Chart annotation engine.
//!
//! Turns pointer interaction on a 2-D drawing surface into trendlines, level
//! lines and Fibonacci guides. The engine lives in [`input`], shapes and
//! rendering in [`draw`], and [`host`] wires both to a Cairo surface for the
//! `chartmark` binary and for embedding.

pub mod config;
pub mod draw;
pub mod host;
pub mod input;
pub mod util;

pub use config::Config;
