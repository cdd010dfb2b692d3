use crate::error::{BitEditError, Result};

/// Address of a single cell, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Pixel geometry of the grid inside the window.
///
/// Cell size is `(window - 2 * border) / side` with integer division, so any
/// remainder is left as unused space after the last row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub window: u32,
    pub border: u32,
    pub side: usize,
}

impl GridLayout {
    pub fn new(window: u32, border: u32, side: usize) -> Self {
        Self { window, border, side }
    }

    /// Side length of one cell in pixels. Zero or negative when the window is
    /// too small to hold the grid.
    pub fn cell_size(&self) -> i64 {
        if self.side == 0 {
            return 0;
        }
        (self.window as i64 - 2 * self.border as i64).div_euclid(self.side as i64)
    }

    /// Pixel length covered by all cells on one axis.
    pub fn grid_extent(&self) -> i64 {
        self.cell_size().max(0) * self.side as i64
    }

    /// Maps a pixel point to the cell under it, or `None` for points in the
    /// border, beyond the last cell or anywhere else off the grid.
    pub fn point_to_cell(&self, x: i32, y: i32) -> Option<CellPos> {
        let cell_size = self.cell_size();
        if cell_size <= 0 {
            return None;
        }
        let border = self.border as i64;
        // floor division, so points left of or above the border land on -1
        let col = (x as i64 - border).div_euclid(cell_size);
        let row = (y as i64 - border).div_euclid(cell_size);
        let side = self.side as i64;
        if (0..side).contains(&row) && (0..side).contains(&col) {
            Some(CellPos::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(BitEditError::InvalidSide);
        }
        Ok(Self {
            side,
            cells: vec![vec![false; side]; side],
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = value;
        Ok(())
    }

    pub fn fill_all(&mut self, value: bool) {
        for row in &mut self.cells {
            row.fill(value);
        }
    }

    /// Overwrites every cell with the checker pattern; (0, 0) is painted.
    pub fn checkerboard(&mut self) {
        for (r, row) in self.cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = r % 2 == c % 2;
            }
        }
    }

    pub fn point_to_cell(&self, point: (i32, i32), window: u32, border: u32) -> Option<CellPos> {
        GridLayout::new(window, border, self.side).point_to_cell(point.0, point.1)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell).count()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row < self.side && col < self.side {
            Ok(())
        } else {
            Err(BitEditError::OutOfBounds {
                row,
                col,
                rows: self.side,
                cols: self.side,
            })
        }
    }
}
