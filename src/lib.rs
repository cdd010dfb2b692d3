//! Core of a black and white bitmap editor: a square boolean grid, the mapping
//! from window pixels to grid cells, and 4-connected flood fill.
//!
//! Rendering and input handling live in the `bitedit` binary; everything here
//! is plain data and can be driven from tests or any other front end.

pub mod config;
pub mod error;
pub mod flood_fill;
pub mod grid;
pub mod session;
pub mod tool;

pub use config::{ConfigError, EditorConfig};
pub use error::{BitEditError, Result};
pub use flood_fill::{flood_fill, white_flood_fill, CellSurface};
pub use grid::{CellPos, Grid, GridLayout};
pub use session::{EditorSession, PointerOutcome};
pub use tool::ToolMode;
