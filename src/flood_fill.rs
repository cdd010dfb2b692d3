//! 4-connected flood fill over boolean cell surfaces
//!
//! Both fills recolor the region of the start cell to the opposite value and
//! stop at cells that already have the target value. The direction comes from
//! the operation alone: `flood_fill` only ever paints white regions black,
//! `white_flood_fill` only ever clears black regions. Starting on a cell that
//! already has the target value changes nothing.
//!
//! The traversal uses an explicit worklist instead of recursion, so a region
//! covering the whole surface cannot exhaust the call stack. A cell counts as
//! visited as soon as it holds the target value; no separate visited set is kept.

use crate::error::{BitEditError, Result};
use crate::grid::{CellPos, Grid};

/// Anything that can be addressed as a rectangle of boolean cells.
pub trait CellSurface {
    fn row_count(&self) -> usize;
    fn col_count(&self) -> usize;
    fn cell(&self, pos: CellPos) -> Result<bool>;
    fn set_cell(&mut self, pos: CellPos, value: bool) -> Result<()>;

    fn has_cells(&self) -> bool {
        self.row_count() > 0 && self.col_count() > 0
    }
}

impl CellSurface for Grid {
    fn row_count(&self) -> usize {
        self.side()
    }

    fn col_count(&self) -> usize {
        self.side()
    }

    fn cell(&self, pos: CellPos) -> Result<bool> {
        self.get(pos.row, pos.col)
    }

    fn set_cell(&mut self, pos: CellPos, value: bool) -> Result<()> {
        self.set(pos.row, pos.col, value)
    }
}

/// Plain row-major matrices. The usable width is the shortest row, so ragged
/// input behaves like its largest complete rectangle.
impl CellSurface for Vec<Vec<bool>> {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn col_count(&self) -> usize {
        self.iter().map(Vec::len).min().unwrap_or(0)
    }

    fn cell(&self, pos: CellPos) -> Result<bool> {
        check_bounds(self, pos)?;
        Ok(self[pos.row][pos.col])
    }

    fn set_cell(&mut self, pos: CellPos, value: bool) -> Result<()> {
        check_bounds(self, pos)?;
        self[pos.row][pos.col] = value;
        Ok(())
    }
}

fn check_bounds<S: CellSurface + ?Sized>(surface: &S, pos: CellPos) -> Result<()> {
    let (rows, cols) = (surface.row_count(), surface.col_count());
    if pos.row < rows && pos.col < cols {
        Ok(())
    } else {
        Err(BitEditError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            rows,
            cols,
        })
    }
}

/// Paint-bucket to black. Returns the number of cells that changed.
pub fn flood_fill<S: CellSurface + ?Sized>(surface: &mut S, start: CellPos) -> Result<usize> {
    recolor_region(surface, start, true)
}

/// Paint-bucket to white. Returns the number of cells that changed.
pub fn white_flood_fill<S: CellSurface + ?Sized>(surface: &mut S, start: CellPos) -> Result<usize> {
    recolor_region(surface, start, false)
}

fn recolor_region<S: CellSurface + ?Sized>(surface: &mut S, start: CellPos, target: bool) -> Result<usize> {
    if !surface.has_cells() {
        return Ok(0);
    }
    if surface.cell(start)? == target {
        return Ok(0);
    }

    let (rows, cols) = (surface.row_count(), surface.col_count());
    surface.set_cell(start, target)?;
    let mut changed = 1;
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        for next in neighbors(pos, rows, cols) {
            if surface.cell(next)? != target {
                surface.set_cell(next, target)?;
                changed += 1;
                stack.push(next);
            }
        }
    }

    Ok(changed)
}

/// North, west, south and east neighbors that lie inside `rows x cols`.
fn neighbors(pos: CellPos, rows: usize, cols: usize) -> impl Iterator<Item = CellPos> {
    let CellPos { row, col } = pos;
    let north = (row > 0).then(|| CellPos::new(row - 1, col));
    let west = (col > 0).then(|| CellPos::new(row, col - 1));
    let south = (row + 1 < rows).then(|| CellPos::new(row + 1, col));
    let east = (col + 1 < cols).then(|| CellPos::new(row, col + 1));
    [north, west, south, east].into_iter().flatten()
}
