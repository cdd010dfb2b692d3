//! Flood fill behavior on whole grids

mod common;

use bitedit::{flood_fill, white_flood_fill, CellPos, Grid};
use common::{all_cells, grid_from, random_grid, region_of};

#[test]
fn test_blank_grid_fills_completely() {
    let mut grid = Grid::new(4).unwrap();
    assert_eq!(flood_fill(&mut grid, CellPos::new(0, 0)).unwrap(), 16);
    assert_eq!(grid.painted_count(), 16);
}

#[test]
fn test_black_row_blocks_fill() {
    let mut grid = grid_from(&[
        "....",
        "####",
        "....",
        "....",
    ]);
    assert_eq!(flood_fill(&mut grid, CellPos::new(0, 0)).unwrap(), 4);
    assert_eq!(
        grid,
        grid_from(&[
            "####",
            "####",
            "....",
            "....",
        ])
    );
}

#[test]
fn test_fill_on_black_cell_is_noop() {
    let mut grid = grid_from(&[
        "#..",
        "...",
        "...",
    ]);
    let before = grid.clone();
    assert_eq!(flood_fill(&mut grid, CellPos::new(0, 0)).unwrap(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_white_fill_on_white_cell_is_noop() {
    let mut grid = grid_from(&[
        "#..",
        "...",
        "..#",
    ]);
    let before = grid.clone();
    assert_eq!(white_flood_fill(&mut grid, CellPos::new(1, 1)).unwrap(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_blackout_then_fill_anywhere_is_noop() {
    let mut grid = Grid::new(6).unwrap();
    grid.fill_all(true);
    for cell in all_cells(6) {
        assert_eq!(flood_fill(&mut grid, cell).unwrap(), 0);
    }
    assert_eq!(grid.painted_count(), 36);
}

#[test]
fn test_checkerboard_regions_are_single_cells() {
    let mut grid = Grid::new(8).unwrap();
    grid.checkerboard();
    assert_eq!(flood_fill(&mut grid, CellPos::new(0, 1)).unwrap(), 1);
    assert_eq!(white_flood_fill(&mut grid, CellPos::new(3, 3)).unwrap(), 1);
    assert_eq!(grid.painted_count(), 32);
}

#[test]
fn test_full_grid_region_does_not_overflow() {
    // long snake-shaped region: deep paths are where recursion would fail
    let side = 256;
    let mut grid = Grid::new(side).unwrap();
    for r in (1..side).step_by(2) {
        for c in 0..side {
            grid.set(r, c, true).unwrap();
        }
        let gap = if (r / 2) % 2 == 0 { side - 1 } else { 0 };
        grid.set(r, gap, false).unwrap();
    }
    let white = side * side - grid.painted_count();
    assert_eq!(flood_fill(&mut grid, CellPos::new(0, 0)).unwrap(), white);
    assert_eq!(grid.painted_count(), side * side);

    assert_eq!(white_flood_fill(&mut grid, CellPos::new(side - 1, side - 1)).unwrap(), side * side);
    assert_eq!(grid.painted_count(), 0);
}

#[test]
fn test_fill_changes_exactly_the_region() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..50 {
        let side = rng.usize(1..20);
        let grid = random_grid(&mut rng, side, 40);
        let start = CellPos::new(rng.usize(..side), rng.usize(..side));
        let region = region_of(&grid, start);
        let start_value = grid.get(start.row, start.col).unwrap();

        let mut filled = grid.clone();
        let changed = if start_value {
            white_flood_fill(&mut filled, start).unwrap()
        } else {
            flood_fill(&mut filled, start).unwrap()
        };
        assert_eq!(changed, region.len());

        for cell in all_cells(side) {
            let old = grid.get(cell.row, cell.col).unwrap();
            let new = filled.get(cell.row, cell.col).unwrap();
            if region.contains(&cell) {
                assert_eq!(new, !old, "region cell {:?} not recolored", cell);
            } else {
                assert_eq!(new, old, "cell {:?} outside the region changed", cell);
            }
        }
    }
}

#[test]
fn test_fill_then_white_fill_restores_region() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..50 {
        let side = rng.usize(1..16);
        let original = random_grid(&mut rng, side, 50);
        let start = CellPos::new(rng.usize(..side), rng.usize(..side));
        if original.get(start.row, start.col).unwrap() {
            continue;
        }

        let mut grid = original.clone();
        flood_fill(&mut grid, start).unwrap();
        let filled = grid.clone();
        white_flood_fill(&mut grid, start).unwrap();

        // the merged black region may extend past the original white one
        for cell in region_of(&original, start) {
            assert!(filled.get(cell.row, cell.col).unwrap());
            assert!(!grid.get(cell.row, cell.col).unwrap());
        }
    }
}

#[test]
fn test_fill_is_idempotent() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..50 {
        let side = rng.usize(1..16);
        let mut grid = random_grid(&mut rng, side, 35);
        let start = CellPos::new(rng.usize(..side), rng.usize(..side));

        flood_fill(&mut grid, start).unwrap();
        let once = grid.clone();
        assert_eq!(flood_fill(&mut grid, start).unwrap(), 0);
        assert_eq!(grid, once);
    }
}
