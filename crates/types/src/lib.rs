//! Shared data types for the word tile board
//!
//! This crate defines the plain data passed between the board algorithms, the
//! session controller and whatever UI drives them. Nothing in here computes
//! game rules; it only describes the shapes of the data.
//!
//! # Coordinates
//!
//! Two coordinate spaces exist and are never mixed within one call:
//!
//! - [`Point`]: integer grid coordinates. `x` is the column (left to right),
//!   `y` is the row (top to bottom). A tile's position is the board coordinate
//!   of its grid's top-left cell.
//! - [`PixelPoint`]: fractional pointer / pixel coordinates, as delivered by
//!   the UI event layer.
//!
//! # Grids
//!
//! A [`Grid`] is a list of rows, each row a list of [`Cell`]s. A cell is either
//! a letter or empty. Tile grids are square once padded; the board is always
//! square.
//!
//! # Examples
//!
//! ```
//! use word_tiles_types::{Grid, Point, ShiftDirection, Tile};
//!
//! let grid = Grid::parse(&["ab", "c."]);
//! assert_eq!(grid.get(1, 0), Some(Some('b')));
//! assert_eq!(grid.get(1, 1), Some(None));
//! assert_eq!(grid.get(2, 0), None);
//!
//! let tile = Tile::new("tile-1", Point::new(3, 4), grid);
//! assert_eq!(tile.rotations, 0);
//!
//! assert_eq!(ShiftDirection::from_str("left"), Some(ShiftDirection::Left));
//! assert_eq!(ShiftDirection::Left.delta(), Point::new(-1, 0));
//! ```

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Number of quarter turns in a full rotation
pub const QUARTER_TURNS: u8 = 4;

/// Maximum number of passes a single shift makes over the tile collection
pub const SHIFT_PASS_LIMIT: u32 = 20;

/// Character used for empty cells when a grid is displayed or parsed
pub const EMPTY_CELL_CHAR: char = '.';

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a column/row offset
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Fractional pointer / pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for PixelPoint {
    type Output = PixelPoint;

    fn add(self, rhs: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PixelPoint {
    type Output = PixelPoint;

    fn sub(self, rhs: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A cell of a grid
///
/// - `None`: empty
/// - `Some(letter)`: occupied by a letter
pub type Cell = Option<char>;

/// Rectangular grid of cells, indexed `[y][x]`
///
/// Serializes as a bare array of rows with `null` for empty cells, which is
/// the format level files use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Create a `size` x `size` grid with every cell empty
    pub fn empty(size: usize) -> Self {
        Self {
            rows: vec![vec![None; size]; size],
        }
    }

    /// Build a grid from text rows, one character per cell
    ///
    /// `.` and space are empty cells; any other character is a letter.
    pub fn parse(rows: &[&str]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| {
                    row.chars()
                        .map(|c| match c {
                            EMPTY_CELL_CHAR | ' ' => None,
                            letter => Some(letter),
                        })
                        .collect()
                })
                .collect(),
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True when the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when every row is as long as the grid is tall
    pub fn is_square(&self) -> bool {
        let size = self.rows.len();
        self.rows.iter().all(|row| row.len() == size)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    /// Get cell at (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Check if (x, y) is in bounds and holds a letter
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Set cell at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        match self
            .rows
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Occupied cells in row-major order (top to bottom, left to right)
    pub fn filled_cells(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                cell.map(|letter| (Point::new(x as i32, y as i32), letter))
            })
        })
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::new(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.unwrap_or(EMPTY_CELL_CHAR))?;
            }
        }
        Ok(())
    }
}

/// A placeable game piece
///
/// `grid` is the unrotated (but square) letter grid; `rotations` counts the
/// clockwise quarter turns applied on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub position: Point,
    pub grid: Grid,
    #[serde(default)]
    pub rotations: u8,
}

impl Tile {
    pub fn new(id: impl Into<String>, position: Point, grid: Grid) -> Self {
        Self {
            id: id.into(),
            position,
            grid,
            rotations: 0,
        }
    }

    pub fn with_rotations(mut self, rotations: u8) -> Self {
        self.rotations = rotations % QUARTER_TURNS;
        self
    }
}

/// Direction used by the whole-board shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ShiftDirection {
    /// One-cell offset for this direction
    pub fn delta(&self) -> Point {
        match self {
            ShiftDirection::Up => Point::new(0, -1),
            ShiftDirection::Down => Point::new(0, 1),
            ShiftDirection::Left => Point::new(-1, 0),
            ShiftDirection::Right => Point::new(1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use word_tiles_types::ShiftDirection;
    ///
    /// assert_eq!(ShiftDirection::from_str("UP"), Some(ShiftDirection::Up));
    /// assert_eq!(ShiftDirection::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(ShiftDirection::Up),
            "down" => Some(ShiftDirection::Down),
            "left" => Some(ShiftDirection::Left),
            "right" => Some(ShiftDirection::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftDirection::Up => "up",
            ShiftDirection::Down => "down",
            ShiftDirection::Left => "left",
            ShiftDirection::Right => "right",
        }
    }
}

/// Board axis named in an off-grid placement failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Which edge of the board an off-grid cell crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    /// Coordinate below zero (left or top edge)
    Negative,
    /// Coordinate at or past the board size (right or bottom edge)
    Positive,
}

/// Details of the first tile cell found outside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffGridDetails {
    pub axis: Axis,
    pub direction: EdgeDirection,
    /// Offending board coordinate on `axis`, unclamped
    pub value: i32,
}

/// Outcome of checking a tile placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum PlacementResult {
    Valid,
    Overlapping,
    OffGrid(OffGridDetails),
}

impl PlacementResult {
    pub fn can_place(&self) -> bool {
        matches!(self, PlacementResult::Valid)
    }

    /// Off-grid details, if that is the failure reason
    pub fn off_grid(&self) -> Option<OffGridDetails> {
        match self {
            PlacementResult::OffGrid(details) => Some(*details),
            _ => None,
        }
    }

    /// Failure reason as a string, `None` when the placement is valid
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            PlacementResult::Valid => None,
            PlacementResult::Overlapping => Some("overlapping"),
            PlacementResult::OffGrid(_) => Some("off-grid"),
        }
    }
}

/// Reading direction of a word on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordDirection {
    Horizontal,
    Vertical,
}

/// A maximal run of two or more letters along a row or column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordResult {
    pub text: String,
    pub direction: WordDirection,
    /// Board cells in reading order
    pub cells: Vec<Point>,
}

/// Target word with its clue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordClue {
    pub text: String,
    #[serde(default)]
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelWords {
    #[serde(default)]
    pub vertical: Vec<WordClue>,
    #[serde(default)]
    pub horizontal: Vec<WordClue>,
}

/// Level definition as loaded from level data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub theme: String,
    pub grid_size: usize,
    pub words: LevelWords,
    pub tiles: Vec<Tile>,
}

impl Level {
    /// Target word texts, vertical clues first
    pub fn target_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words
            .vertical
            .iter()
            .chain(self.words.horizontal.iter())
            .map(|clue| clue.text.as_str())
    }
}
