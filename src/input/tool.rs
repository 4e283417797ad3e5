//! Drawing tool selection.

use crate::draw::ShapeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tool currently armed on the overlay.
///
/// `None` means pointer activity passes through without drawing. Every other
/// variant draws exactly one [`ShapeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// No drawing tool selected
    #[default]
    None,
    /// Two-anchor trendline (sticky)
    Trendline,
    /// One-anchor full-width line
    Horizontal,
    /// One-anchor full-height line
    Vertical,
    /// One-anchor horizontal ray
    Ray,
    /// Two-anchor Fibonacci retracement (sticky)
    #[serde(alias = "fibonacci_retracement")]
    FibRetracement,
    /// Three-anchor Fibonacci extension (sticky)
    #[serde(alias = "fibonacci_extension")]
    FibExtension,
    /// Three-anchor Fibonacci projection (sticky)
    #[serde(alias = "fibonacci_projection")]
    FibProjection,
}

impl ToolKind {
    /// Selectable drawing tools in toolbar order.
    pub const ALL: [ToolKind; 7] = [
        ToolKind::Trendline,
        ToolKind::Horizontal,
        ToolKind::Vertical,
        ToolKind::Ray,
        ToolKind::FibRetracement,
        ToolKind::FibExtension,
        ToolKind::FibProjection,
    ];

    /// The shape this tool draws, or `None` for the pass-through tool.
    pub const fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::None => None,
            ToolKind::Trendline => Some(ShapeKind::Trendline),
            ToolKind::Horizontal => Some(ShapeKind::Horizontal),
            ToolKind::Vertical => Some(ShapeKind::Vertical),
            ToolKind::Ray => Some(ShapeKind::Ray),
            ToolKind::FibRetracement => Some(ShapeKind::FibRetracement),
            ToolKind::FibExtension => Some(ShapeKind::FibExtension),
            ToolKind::FibProjection => Some(ShapeKind::FibProjection),
        }
    }

    /// Anchors needed to complete one shape with this tool.
    pub fn required_anchor_count(self) -> Option<usize> {
        self.shape_kind().map(ShapeKind::required_anchor_count)
    }

    /// Whether the tool stays selected after completing a shape.
    pub fn is_sticky(self) -> bool {
        self.shape_kind().is_some_and(ShapeKind::is_sticky)
    }

    /// Stable identifier used in config files and scripts.
    pub const fn id(self) -> &'static str {
        match self {
            ToolKind::None => "none",
            ToolKind::Trendline => "trendline",
            ToolKind::Horizontal => "horizontal",
            ToolKind::Vertical => "vertical",
            ToolKind::Ray => "ray",
            ToolKind::FibRetracement => "fib_retracement",
            ToolKind::FibExtension => "fib_extension",
            ToolKind::FibProjection => "fib_projection",
        }
    }

    /// Human-readable name for toolbars and status output.
    pub const fn title(self) -> &'static str {
        match self {
            ToolKind::None => "None",
            ToolKind::Trendline => "Trendline",
            ToolKind::Horizontal => "Horizontal Line",
            ToolKind::Vertical => "Vertical Line",
            ToolKind::Ray => "Ray",
            ToolKind::FibRetracement => "Fibonacci Retracement",
            ToolKind::FibExtension => "Fibonacci Extension",
            ToolKind::FibProjection => "Fibonacci Projection",
        }
    }
}

impl From<ShapeKind> for ToolKind {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Trendline => ToolKind::Trendline,
            ShapeKind::Horizontal => ToolKind::Horizontal,
            ShapeKind::Vertical => ToolKind::Vertical,
            ShapeKind::Ray => ToolKind::Ray,
            ShapeKind::FibRetracement => ToolKind::FibRetracement,
            ShapeKind::FibExtension => ToolKind::FibExtension,
            ShapeKind::FibProjection => ToolKind::FibProjection,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        let tool = match normalized.as_str() {
            "none" => ToolKind::None,
            "trendline" => ToolKind::Trendline,
            "horizontal" | "hline" => ToolKind::Horizontal,
            "vertical" | "vline" => ToolKind::Vertical,
            "ray" => ToolKind::Ray,
            "fib_retracement" | "fibonacci_retracement" => ToolKind::FibRetracement,
            "fib_extension" | "fibonacci_extension" => ToolKind::FibExtension,
            "fib_projection" | "fibonacci_projection" => ToolKind::FibProjection,
            _ => return Err(format!("Unknown tool '{}'", s.trim())),
        };
        Ok(tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_shape() {
        assert_eq!(ToolKind::None.shape_kind(), None);
        assert_eq!(ToolKind::None.required_anchor_count(), None);
        assert!(!ToolKind::None.is_sticky());
    }

    #[test]
    fn anchor_counts_follow_shape_kinds() {
        let counts: Vec<_> = ToolKind::ALL
            .iter()
            .map(|tool| tool.required_anchor_count())
            .collect();
        assert_eq!(
            counts,
            [2, 1, 1, 1, 2, 3, 3].map(Some).to_vec()
        );
    }

    #[test]
    fn shape_kind_round_trips_through_tool() {
        for tool in ToolKind::ALL {
            let kind = tool.shape_kind().unwrap();
            assert_eq!(ToolKind::from(kind), tool);
        }
    }

    #[test]
    fn parse_accepts_ids_and_long_names() {
        for tool in ToolKind::ALL {
            assert_eq!(tool.id().parse::<ToolKind>(), Ok(tool));
        }
        assert_eq!(
            "fibonacci_extension".parse::<ToolKind>(),
            Ok(ToolKind::FibExtension)
        );
        assert_eq!("Fib-Projection".parse::<ToolKind>(), Ok(ToolKind::FibProjection));
        assert!("eraser".parse::<ToolKind>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        #[derive(Deserialize)]
        struct Wrapper {
            tool: ToolKind,
        }
        let parsed: Wrapper = toml::from_str("tool = \"fibonacci_retracement\"").unwrap();
        assert_eq!(parsed.tool, ToolKind::FibRetracement);
        let parsed: Wrapper = toml::from_str("tool = \"fib_extension\"").unwrap();
        assert_eq!(parsed.tool, ToolKind::FibExtension);
    }
}
