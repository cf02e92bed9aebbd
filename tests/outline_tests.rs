//! Outline tests - perimeter polygons of tile shapes

use word_tiles::core::{has_holes, is_edge_connected, outline, to_svg_path};
use word_tiles::types::{Grid, Point};

fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_single_cell() {
    assert_eq!(
        outline(&Grid::parse(&["a"])),
        pts(&[(0, 0), (1, 0), (1, 1), (0, 1)])
    );
}

#[test]
fn test_l_shape() {
    let grid = Grid::parse(&["a..", "b..", "cde"]);
    assert_eq!(
        outline(&grid),
        pts(&[
            (0, 0),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 2),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
            (0, 3),
            (0, 2),
            (0, 1),
        ])
    );
}

#[test]
fn test_t_shape() {
    let grid = Grid::parse(&["abc", ".d.", ".e."]);
    assert_eq!(
        outline(&grid),
        pts(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (3, 1),
            (2, 1),
            (2, 2),
            (2, 3),
            (1, 3),
            (1, 2),
            (1, 1),
            (0, 1),
        ])
    );
}

#[test]
fn test_plus_shape_starts_at_first_cell() {
    let grid = Grid::parse(&[".a.", "bcd", ".e."]);
    assert_eq!(
        outline(&grid),
        pts(&[
            (1, 0),
            (2, 0),
            (2, 1),
            (3, 1),
            (3, 2),
            (2, 2),
            (2, 3),
            (1, 3),
            (1, 2),
            (0, 2),
            (0, 1),
            (1, 1),
        ])
    );
}

#[test]
fn test_horizontal_line() {
    assert_eq!(
        outline(&Grid::parse(&["abcd"])),
        pts(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (4, 1),
            (3, 1),
            (2, 1),
            (1, 1),
            (0, 1),
        ])
    );
}

#[test]
fn test_staircase() {
    let grid = Grid::parse(&["ab.", "cde", ".fg"]);
    assert_eq!(
        outline(&grid),
        pts(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (3, 1),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
            (1, 2),
            (0, 2),
            (0, 1),
        ])
    );
}

#[test]
fn test_corner_shape() {
    let grid = Grid::parse(&["ab", "c."]);
    assert_eq!(
        outline(&grid),
        pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (1, 2), (0, 2), (0, 1)])
    );
}

#[test]
fn test_padding_does_not_change_shape() {
    let tight = outline(&Grid::parse(&["ab"]));
    let padded = outline(&Grid::parse(&["..", "ab"]));
    let shifted: Vec<_> = tight.iter().map(|p| p.offset(0, 1)).collect();
    assert_eq!(padded, shifted);
}

#[test]
fn test_svg_path_for_outline() {
    let path = to_svg_path(&outline(&Grid::parse(&["a"])), 40.0);
    assert_eq!(path, "M 0 0 L 40 0 L 40 40 L 0 40 Z");
}

#[test]
fn test_connectivity_for_level_shapes() {
    assert!(is_edge_connected(&Grid::parse(&[".s.", "par"])));
    assert!(!is_edge_connected(&Grid::parse(&["s.", ".a"])));
}

#[test]
fn test_ring_shapes_have_holes() {
    let ring = Grid::parse(&["xxx", "x.x", ".xx"]);
    assert!(is_edge_connected(&ring));
    assert!(has_holes(&ring));

    let ring = Grid::parse(&["abcd", "e..f", "ghij"]);
    assert!(has_holes(&ring));
}

#[test]
fn test_open_pockets_are_not_holes() {
    // The gap touches the grid edge, so it is reachable from outside.
    assert!(!has_holes(&Grid::parse(&["abc", "d.e", "f.g"])));
    // A diagonal gap does not connect the middle to the outside.
    assert!(has_holes(&Grid::parse(&["ab.", "c.d", "efg"])));
}
