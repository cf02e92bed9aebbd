//! Outline module - boundary polygon of a tile's occupied cells
//!
//! Every occupied cell contributes its four unit edges. Edges shared by two
//! occupied cells are interior and dropped; the remaining perimeter edges are
//! stitched head to tail into one closed loop of grid-corner coordinates.
//!
//! The walk starts at the top-left corner of the first occupied cell (row-major)
//! along its top edge, so it runs clockwise in screen coordinates (y down).
//! Results are only defined for a single edge-connected piece without holes;
//! [`is_edge_connected`] and [`has_holes`] let level loading reject anything
//! else.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Write;

use crate::types::{Grid, Point};

/// Unit edge between two grid corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Edge {
    start: Point,
    end: Point,
}

impl Edge {
    const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction-independent identity of the edge
    fn key(&self) -> (Point, Point) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

/// Top, right, bottom and left edges of the cell at `cell`
fn cell_edges(cell: Point) -> [Edge; 4] {
    let Point { x, y } = cell;
    [
        Edge::new(Point::new(x, y), Point::new(x + 1, y)),
        Edge::new(Point::new(x + 1, y), Point::new(x + 1, y + 1)),
        Edge::new(Point::new(x, y + 1), Point::new(x + 1, y + 1)),
        Edge::new(Point::new(x, y), Point::new(x, y + 1)),
    ]
}

/// Closed outline of the occupied cells, without a repeated closing point
///
/// Returns an empty list for a grid with no occupied cells.
///
/// # Examples
///
/// ```
/// use word_tiles_core::outline::outline;
/// use word_tiles_core::types::{Grid, Point};
///
/// let points = outline(&Grid::parse(&["a"]));
/// assert_eq!(
///     points,
///     vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1), Point::new(0, 1)]
/// );
/// ```
pub fn outline(grid: &Grid) -> Vec<Point> {
    let edges: Vec<Edge> = grid
        .filled_cells()
        .flat_map(|(cell, _)| cell_edges(cell))
        .collect();

    let mut counts: HashMap<(Point, Point), u32> = HashMap::with_capacity(edges.len());
    for edge in &edges {
        *counts.entry(edge.key()).or_insert(0) += 1;
    }

    let mut remaining: Vec<Edge> = edges
        .into_iter()
        .filter(|edge| counts.get(&edge.key()) == Some(&1))
        .collect();

    if remaining.is_empty() {
        return Vec::new();
    }

    let first = remaining.remove(0);
    let mut points = vec![first.start, first.end];
    let mut head = first.end;

    while let Some(index) = remaining
        .iter()
        .position(|edge| edge.start == head || edge.end == head)
    {
        let next = remaining.remove(index);
        head = if next.start == head { next.end } else { next.start };
        points.push(head);
    }

    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    points
}

/// True when the occupied cells form exactly one 4-connected piece
///
/// A grid without occupied cells is not connected.
pub fn is_edge_connected(grid: &Grid) -> bool {
    let filled: HashSet<Point> = grid.filled_cells().map(|(cell, _)| cell).collect();
    let Some(&start) = filled.iter().min() else {
        return false;
    };

    let mut seen = HashSet::with_capacity(filled.len());
    let mut queue = VecDeque::from([start]);
    seen.insert(start);

    while let Some(cell) = queue.pop_front() {
        for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
            let next = cell.offset(dx, dy);
            if filled.contains(&next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen.len() == filled.len()
}

/// True when some empty cell is enclosed by occupied cells
///
/// Empty cells are flooded from a one-cell margin around the grid; any empty
/// cell inside the grid the flood cannot reach is a hole. Diagonal gaps do
/// not let the flood through.
pub fn has_holes(grid: &Grid) -> bool {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let inside = |cell: Point| cell.x >= -1 && cell.x <= width && cell.y >= -1 && cell.y <= height;

    let start = Point::new(-1, -1);
    let mut outside = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
            let next = cell.offset(dx, dy);
            if inside(next) && !grid.is_occupied(next.x, next.y) && outside.insert(next) {
                queue.push_back(next);
            }
        }
    }

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point::new(x, y)))
        .any(|cell| !grid.is_occupied(cell.x, cell.y) && !outside.contains(&cell))
}

/// SVG path data for a closed polygon, each coordinate multiplied by `scale`
///
/// # Examples
///
/// ```
/// use word_tiles_core::outline::to_svg_path;
/// use word_tiles_core::types::Point;
///
/// let path = to_svg_path(&[Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)], 10.0);
/// assert_eq!(path, "M 0 0 L 10 0 L 10 10 Z");
/// ```
pub fn to_svg_path(points: &[Point], scale: f64) -> String {
    let mut path = String::new();
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        let x = f64::from(point.x) * scale;
        let y = f64::from(point.y) * scale;
        // Writing to a String cannot fail.
        let _ = write!(path, "{} {} {} ", command, x, y);
    }
    if !path.is_empty() {
        path.push('Z');
    }
    path
}
