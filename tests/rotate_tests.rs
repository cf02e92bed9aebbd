//! Rotation tests - quarter turns of square grids

use word_tiles::core::rotate::{oriented_grid, rotate};
use word_tiles::core::ShapeError;
use word_tiles::types::{Grid, Point, Tile};

fn sample() -> Grid {
    Grid::parse(&["ab.", "c.d", ".ef"])
}

#[test]
fn test_four_turns_round_trip() {
    let grid = sample();
    let mut turned = grid.clone();
    for _ in 0..4 {
        turned = rotate(&turned, 1).unwrap();
    }
    assert_eq!(turned, grid);
}

#[test]
fn test_one_then_three_round_trip() {
    let grid = sample();
    let once = rotate(&grid, 1).unwrap();
    assert_ne!(once, grid);
    assert_eq!(rotate(&once, 3).unwrap(), grid);
    assert_eq!(rotate(&once, -1).unwrap(), grid);
}

#[test]
fn test_turns_taken_modulo_four() {
    let grid = sample();
    assert_eq!(rotate(&grid, 0).unwrap(), grid);
    assert_eq!(rotate(&grid, 4).unwrap(), grid);
    assert_eq!(rotate(&grid, 5).unwrap(), rotate(&grid, 1).unwrap());
    assert_eq!(rotate(&grid, 2).unwrap(), Grid::parse(&["fe.", "d.c", ".ba"]));
}

#[test]
fn test_clockwise_two_by_two() {
    let grid = Grid::parse(&["ab", "cd"]);
    assert_eq!(rotate(&grid, 1).unwrap(), Grid::parse(&["ca", "db"]));
    assert_eq!(rotate(&grid, 3).unwrap(), Grid::parse(&["bd", "ac"]));
}

#[test]
fn test_non_square_rejected() {
    let err = rotate(&Grid::parse(&["abc", "def"]), 1).unwrap_err();
    assert!(matches!(err, ShapeError::NotSquare { size: 2, row: 0, len: 3 }));
    assert!(err.to_string().starts_with("grid must be square"));
}

#[test]
fn test_empty_grid() {
    assert_eq!(rotate(&Grid::default(), 1).unwrap(), Grid::default());
}

#[test]
fn test_oriented_grid_uses_rotation_count() {
    let tile = Tile::new("t", Point::new(0, 0), Grid::parse(&["ab", "cd"])).with_rotations(2);
    assert_eq!(oriented_grid(&tile).unwrap(), Grid::parse(&["dc", "ba"]));
}
