//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use bitedit::{CellPos, Grid};

/// Grid from rows of `#` (painted) and `.` (blank).
pub fn grid_from(rows: &[&str]) -> Grid {
    let mut grid = Grid::new(rows.len()).unwrap();
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), rows.len(), "pattern must be square");
        for (c, ch) in row.chars().enumerate() {
            grid.set(r, c, ch == '#').unwrap();
        }
    }
    grid
}

/// Random grid with roughly `percent` percent painted cells.
pub fn random_grid(rng: &mut fastrand::Rng, side: usize, percent: u8) -> Grid {
    let mut grid = Grid::new(side).unwrap();
    for r in 0..side {
        for c in 0..side {
            grid.set(r, c, rng.u8(0..100) < percent).unwrap();
        }
    }
    grid
}

/// 4-connected region of cells sharing the start cell's value, computed
/// independently of the library with a visited set.
pub fn region_of(grid: &Grid, start: CellPos) -> HashSet<CellPos> {
    let side = grid.side();
    let value = grid.get(start.row, start.col).unwrap();
    let mut region = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(pos) = queue.pop_front() {
        let mut candidates = Vec::new();
        if pos.row > 0 {
            candidates.push(CellPos::new(pos.row - 1, pos.col));
        }
        if pos.col > 0 {
            candidates.push(CellPos::new(pos.row, pos.col - 1));
        }
        if pos.row + 1 < side {
            candidates.push(CellPos::new(pos.row + 1, pos.col));
        }
        if pos.col + 1 < side {
            candidates.push(CellPos::new(pos.row, pos.col + 1));
        }
        for next in candidates {
            if grid.get(next.row, next.col).unwrap() == value && region.insert(next) {
                queue.push_back(next);
            }
        }
    }

    region
}

pub fn all_cells(side: usize) -> impl Iterator<Item = CellPos> {
    (0..side).flat_map(move |r| (0..side).map(move |c| CellPos::new(r, c)))
}
