use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BitEditError;

/// The active editing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolMode {
    /// Paint one cell black
    #[default]
    Black,
    /// Paint one cell white
    White,
    /// Flood a white region with black
    Fill,
    /// Flood a black region with white
    WhiteFill,
    /// Paint the whole grid black
    Blackout,
    /// Paint the whole grid white
    Whiteout,
    /// Overwrite the grid with a checker pattern
    Checker,
}

impl ToolMode {
    /// Every tool, in palette order.
    pub const ALL: [ToolMode; 7] = [
        ToolMode::Black,
        ToolMode::White,
        ToolMode::Fill,
        ToolMode::WhiteFill,
        ToolMode::Blackout,
        ToolMode::Whiteout,
        ToolMode::Checker,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolMode::Black => "black",
            ToolMode::White => "white",
            ToolMode::Fill => "fill",
            ToolMode::WhiteFill => "white_fill",
            ToolMode::Blackout => "blackout",
            ToolMode::Whiteout => "whiteout",
            ToolMode::Checker => "checker",
        }
    }

    /// Whether the tool rewrites the whole grid regardless of the clicked cell.
    pub fn ignores_cell(self) -> bool {
        matches!(self, ToolMode::Blackout | ToolMode::Whiteout | ToolMode::Checker)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolMode {
    type Err = BitEditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolMode::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| BitEditError::InvalidToolName(s.to_string()))
    }
}
