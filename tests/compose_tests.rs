//! Board composition tests

use word_tiles::core::{compose_board, compose_board_without};
use word_tiles::types::{Grid, Point, Tile};

#[test]
fn test_single_tile_overlay() {
    let tiles = vec![Tile::new("t", Point::new(1, 2), Grid::parse(&["ab", "cd"]))];
    let board = compose_board(&tiles, 5).unwrap();

    assert_eq!(board.height(), 5);
    assert!(board.is_square());
    assert_eq!(board.get(1, 2), Some(Some('a')));
    assert_eq!(board.get(2, 2), Some(Some('b')));
    assert_eq!(board.get(1, 3), Some(Some('c')));
    assert_eq!(board.get(2, 3), Some(Some('d')));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_no_tiles_gives_empty_board() {
    let board = compose_board(std::iter::empty(), 3).unwrap();
    assert_eq!(board, Grid::empty(3));
}

#[test]
fn test_rotated_tiles_and_clipping() {
    let tiles = vec![
        Tile::new("l", Point::new(0, 0), Grid::parse(&["a..", "b..", "cde"])).with_rotations(1),
        Tile::new("edge", Point::new(3, 3), Grid::parse(&["xy", "zw"])),
    ];
    let board = compose_board(&tiles, 4).unwrap();
    assert_eq!(board, Grid::parse(&["cba.", "d...", "e...", "...x"]));
}

#[test]
fn test_overlap_last_write_wins() {
    let tiles = vec![
        Tile::new("one", Point::new(0, 0), Grid::parse(&["ab", "cd"])),
        Tile::new("two", Point::new(1, 1), Grid::parse(&["xy", "zw"])),
    ];
    let board = compose_board(&tiles, 3).unwrap();
    assert_eq!(board, Grid::parse(&["ab.", "cxy", ".zw"]));
}

#[test]
fn test_compose_without_tile() {
    let tiles = vec![
        Tile::new("one", Point::new(0, 0), Grid::parse(&["a"])),
        Tile::new("two", Point::new(2, 2), Grid::parse(&["b"])),
    ];
    let board = compose_board_without(&tiles, 3, "one").unwrap();
    assert_eq!(board, Grid::parse(&["...", "...", "..b"]));
}
