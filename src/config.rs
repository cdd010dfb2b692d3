use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::GridLayout;
use crate::tool::ToolMode;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Construction-time parameters for an editor window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Height of the window in pixels; the grid area is square.
    pub window: u32,
    /// Margin around the grid and palette elements.
    pub border: u32,
    /// Number of cells on one side of the grid.
    pub cells_side: usize,
    pub initial_tool: ToolMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window: 600,
            border: 10,
            cells_side: 32,
            initial_tool: ToolMode::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cells_side == 0 {
            return Err(ConfigError::Invalid("cells_side must be at least 1".to_string()));
        }
        if self.window <= self.border.saturating_mul(2) {
            return Err(ConfigError::Invalid(format!(
                "window {} leaves no room inside a {} pixel border",
                self.window, self.border
            )));
        }
        if self.layout().cell_size() < 1 {
            return Err(ConfigError::Invalid(format!(
                "{} cells do not fit in {} pixels",
                self.cells_side,
                self.window - 2 * self.border
            )));
        }
        Ok(())
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.window, self.border, self.cells_side)
    }

    /// Full canvas size: grid area plus the thumbnail/palette column.
    pub fn canvas_size(&self) -> (u32, u32) {
        let side = u32::try_from(self.cells_side).unwrap_or(u32::MAX);
        (self.window.saturating_add(self.border).saturating_add(side), self.window)
    }
}
