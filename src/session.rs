use crate::config::EditorConfig;
use crate::error::Result;
use crate::flood_fill::{flood_fill, white_flood_fill};
use crate::grid::{CellPos, Grid, GridLayout};
use crate::tool::ToolMode;

/// What a pointer press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The press landed on a cell and the active tool was applied.
    Applied { cell: CellPos, tool: ToolMode },
    /// The press missed the grid; the host may treat it as palette input.
    OutsideGrid,
}

/// One editing session: a grid, its pixel layout and the active tool.
#[derive(Debug, Clone)]
pub struct EditorSession {
    grid: Grid,
    layout: GridLayout,
    tool: ToolMode,
}

impl EditorSession {
    pub fn new(side: usize, window: u32, border: u32) -> Result<Self> {
        let grid = Grid::new(side)?;
        Ok(Self {
            grid,
            layout: GridLayout::new(window, border, side),
            tool: ToolMode::default(),
        })
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self> {
        let mut session = Self::new(config.cells_side, config.window, config.border)?;
        session.tool = config.initial_tool;
        Ok(session)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ToolMode) {
        if self.tool != tool {
            log::info!("Tool changed: {} -> {}", self.tool, tool);
            self.tool = tool;
        }
    }

    /// Selects a tool by name. Unknown names leave the current tool in place.
    pub fn select_tool(&mut self, name: &str) -> Result<()> {
        match name.parse::<ToolMode>() {
            Ok(tool) => {
                self.set_tool(tool);
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejected tool selection: {}", err);
                Err(err)
            }
        }
    }

    pub fn pointer_down(&mut self, x: i32, y: i32) -> Result<PointerOutcome> {
        match self.layout.point_to_cell(x, y) {
            Some(cell) => {
                self.apply_tool(cell)?;
                Ok(PointerOutcome::Applied { cell, tool: self.tool })
            }
            None => Ok(PointerOutcome::OutsideGrid),
        }
    }

    /// Applies the active tool at `cell` and returns how many cells changed.
    pub fn apply_tool(&mut self, cell: CellPos) -> Result<usize> {
        let changed = apply(self.tool, &mut self.grid, cell)?;
        if self.tool.ignores_cell() {
            log::debug!("{} changed {} cells", self.tool, changed);
        } else {
            log::debug!("{} at ({}, {}) changed {} cells", self.tool, cell.row, cell.col, changed);
        }
        Ok(changed)
    }
}

/// Runs one tool against the grid. Whole-grid tools ignore `cell`.
pub fn apply(tool: ToolMode, grid: &mut Grid, cell: CellPos) -> Result<usize> {
    match tool {
        ToolMode::Black => set_counted(grid, cell, true),
        ToolMode::White => set_counted(grid, cell, false),
        ToolMode::Fill => flood_fill(grid, cell),
        ToolMode::WhiteFill => white_flood_fill(grid, cell),
        ToolMode::Blackout => Ok(rewrite(grid, |g| g.fill_all(true))),
        ToolMode::Whiteout => Ok(rewrite(grid, |g| g.fill_all(false))),
        ToolMode::Checker => Ok(rewrite(grid, Grid::checkerboard)),
    }
}

fn set_counted(grid: &mut Grid, cell: CellPos, value: bool) -> Result<usize> {
    let before = grid.get(cell.row, cell.col)?;
    grid.set(cell.row, cell.col, value)?;
    Ok(usize::from(before != value))
}

fn rewrite(grid: &mut Grid, op: impl FnOnce(&mut Grid)) -> usize {
    let before = grid.clone();
    op(grid);
    before
        .rows()
        .zip(grid.rows())
        .map(|(old, new)| old.iter().zip(new).filter(|(a, b)| a != b).count())
        .sum()
}
