//! Keybinding configuration types and parsing.
//!
//! Hosts map key presses to engine [`Action`]s through these bindings. Each
//! action can be bound to several keys.

use crate::input::ToolKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Tool selection
    SelectTrendline,
    SelectHorizontal,
    SelectVertical,
    SelectRay,
    SelectFibRetracement,
    SelectFibExtension,
    SelectFibProjection,
    SelectNone,

    // Destructive
    ClearAll,
}

impl Action {
    /// The tool a selection action arms; `None` for non-selection actions.
    pub fn tool(self) -> Option<ToolKind> {
        let tool = match self {
            Action::SelectTrendline => ToolKind::Trendline,
            Action::SelectHorizontal => ToolKind::Horizontal,
            Action::SelectVertical => ToolKind::Vertical,
            Action::SelectRay => ToolKind::Ray,
            Action::SelectFibRetracement => ToolKind::FibRetracement,
            Action::SelectFibExtension => ToolKind::FibExtension,
            Action::SelectFibProjection => ToolKind::FibProjection,
            Action::SelectNone => ToolKind::None,
            Action::ClearAll => return None,
        };
        Some(tool)
    }
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parses strings like `"Shift+F"`, `"Ctrl + Alt + T"` or `"Escape"`.
    ///
    /// Modifiers may appear in any order. The key name is kept as written and
    /// compared case-insensitively by [`KeyBinding::matches`].
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let mut binding = Self {
            key: String::new(),
            ctrl: false,
            shift: false,
            alt: false,
        };
        let mut key_parts = Vec::new();

        for part in s.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                _ => key_parts.push(part),
            }
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; rejoining the tail yields "+".
        let key = key_parts.join("+");
        if key.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }
        binding.key = key;
        Ok(binding)
    }

    /// Whether this binding matches a key press with the given modifiers.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }

    fn normalized(&self) -> Self {
        Self {
            key: self.key.to_lowercase(),
            ..self.clone()
        }
    }
}

/// Looks up the action bound to a key press.
pub fn lookup_action(
    map: &HashMap<KeyBinding, Action>,
    key: &str,
    ctrl: bool,
    shift: bool,
    alt: bool,
) -> Option<Action> {
    map.iter()
        .find(|(binding, _)| binding.matches(key, ctrl, shift, alt))
        .map(|(_, action)| *action)
}

/// Configuration for all keybindings.
///
/// ```toml
/// [keybindings]
/// select_trendline = ["T"]
/// select_fib_extension = ["Shift+F"]
/// clear_all = ["E", "Ctrl+Backspace"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_select_trendline")]
    pub select_trendline: Vec<String>,

    #[serde(default = "default_select_horizontal")]
    pub select_horizontal: Vec<String>,

    #[serde(default = "default_select_vertical")]
    pub select_vertical: Vec<String>,

    #[serde(default = "default_select_ray")]
    pub select_ray: Vec<String>,

    #[serde(default = "default_select_fib_retracement")]
    pub select_fib_retracement: Vec<String>,

    #[serde(default = "default_select_fib_extension")]
    pub select_fib_extension: Vec<String>,

    #[serde(default = "default_select_fib_projection")]
    pub select_fib_projection: Vec<String>,

    #[serde(default = "default_select_none")]
    pub select_none: Vec<String>,

    #[serde(default = "default_clear_all")]
    pub clear_all: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            select_trendline: default_select_trendline(),
            select_horizontal: default_select_horizontal(),
            select_vertical: default_select_vertical(),
            select_ray: default_select_ray(),
            select_fib_retracement: default_select_fib_retracement(),
            select_fib_extension: default_select_fib_extension(),
            select_fib_projection: default_select_fib_projection(),
            select_none: default_select_none(),
            clear_all: default_clear_all(),
        }
    }
}

impl KeybindingsConfig {
    fn bindings(&self) -> [(&[String], Action); 9] {
        [
            (self.select_trendline.as_slice(), Action::SelectTrendline),
            (self.select_horizontal.as_slice(), Action::SelectHorizontal),
            (self.select_vertical.as_slice(), Action::SelectVertical),
            (self.select_ray.as_slice(), Action::SelectRay),
            (self.select_fib_retracement.as_slice(), Action::SelectFibRetracement),
            (self.select_fib_extension.as_slice(), Action::SelectFibExtension),
            (self.select_fib_projection.as_slice(), Action::SelectFibProjection),
            (self.select_none.as_slice(), Action::SelectNone),
            (self.clear_all.as_slice(), Action::ClearAll),
        ]
    }

    /// Builds the lookup map from keybindings to actions.
    ///
    /// Fails on an unparsable binding, or when the same key combination
    /// (ignoring key case and modifier order) is bound twice.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();
        let mut seen: HashMap<KeyBinding, (String, Action)> = HashMap::new();

        for (binding_strs, action) in self.bindings() {
            for binding_str in binding_strs {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some((existing_str, existing_action)) =
                    seen.insert(binding.normalized(), (binding_str.clone(), action))
                {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} ('{}') and {:?}",
                        binding_str, existing_action, existing_str, action
                    ));
                }
                map.insert(binding, action);
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_select_trendline() -> Vec<String> {
    vec!["T".to_string()]
}

fn default_select_horizontal() -> Vec<String> {
    vec!["H".to_string()]
}

fn default_select_vertical() -> Vec<String> {
    vec!["V".to_string()]
}

fn default_select_ray() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_select_fib_retracement() -> Vec<String> {
    vec!["F".to_string()]
}

fn default_select_fib_extension() -> Vec<String> {
    vec!["Shift+F".to_string()]
}

fn default_select_fib_projection() -> Vec<String> {
    vec!["Alt+F".to_string()]
}

fn default_select_none() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_clear_all() -> Vec<String> {
    vec!["E".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl && !binding.shift && !binding.alt);
    }

    #[test]
    fn test_parse_modifiers_any_order() {
        let a = KeyBinding::parse("Ctrl+Alt+Shift+F").unwrap();
        let b = KeyBinding::parse("shift + alt + control + F").unwrap();
        assert_eq!(a, b);
        assert!(a.ctrl && a.shift && a.alt);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let binding = KeyBinding::parse("Shift+F").unwrap();
        assert!(binding.matches("f", false, true, false));
        assert!(!binding.matches("F", false, false, false));
        assert!(!binding.matches("G", false, true, false));
    }

    #[test]
    fn test_action_tools() {
        assert_eq!(Action::SelectRay.tool(), Some(ToolKind::Ray));
        assert_eq!(Action::SelectNone.tool(), Some(ToolKind::None));
        assert_eq!(Action::ClearAll.tool(), None);
    }

    #[test]
    fn test_default_action_map() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();
        assert_eq!(map.len(), 9);
        assert_eq!(
            lookup_action(&map, "t", false, false, false),
            Some(Action::SelectTrendline)
        );
        assert_eq!(
            lookup_action(&map, "F", false, true, false),
            Some(Action::SelectFibExtension)
        );
        assert_eq!(
            lookup_action(&map, "F", false, false, true),
            Some(Action::SelectFibProjection)
        );
        assert_eq!(
            lookup_action(&map, "Escape", false, false, false),
            Some(Action::SelectNone)
        );
        assert_eq!(lookup_action(&map, "Q", false, false, false), None);
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let config = KeybindingsConfig {
            clear_all: vec!["t".to_string()],
            ..KeybindingsConfig::default()
        };
        let err = config.build_action_map().unwrap_err();
        assert!(err.contains("Duplicate keybinding"));
        assert!(err.contains("SelectTrendline"));
    }

    #[test]
    fn test_duplicate_with_different_modifier_order() {
        let config = KeybindingsConfig {
            select_ray: vec!["Ctrl+Shift+R".to_string()],
            clear_all: vec!["Shift+Ctrl+R".to_string()],
            ..KeybindingsConfig::default()
        };
        assert!(config.build_action_map().is_err());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: KeybindingsConfig = toml::from_str("select_ray = [\"Y\"]").unwrap();
        assert_eq!(config.select_ray, vec!["Y".to_string()]);
        assert_eq!(config.clear_all, vec!["E".to_string()]);
    }
}
