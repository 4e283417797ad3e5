//! TOML interaction scripts replayed through an [`Overlay`](super::Overlay).
//!
//! ```toml
//! [surface]
//! width = 640
//! height = 360
//!
//! [[step]]
//! action = "select"
//! tool = "horizontal"
//!
//! [[step]]
//! action = "press"
//! x = 5.0
//! y = 20.0
//!
//! [[step]]
//! action = "release"
//! ```

use crate::input::ToolKind;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional surface placement and size overrides.
///
/// Coordinates in steps are client coordinates; `left`/`top` give the
/// surface origin inside the client area.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScriptSurface {
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
}

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Select {
        tool: ToolKind,
    },
    Press {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Release {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    DoublePress {
        x: f64,
        y: f64,
    },
    Leave {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Clear,
    /// A key press such as `"Shift+F"`, resolved through the keybindings
    Key {
        key: String,
    },
}

/// A parsed interaction script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub surface: ScriptSurface,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::parse(&source)?;
        log::debug!("Loaded {} step(s) from {}", script.steps.len(), path.display());
        Ok(script)
    }
}
