//! Words module - extract words from a composed board
//!
//! A word is a maximal run of two or more occupied cells along a row or a
//! column. All horizontal words come first (rows top to bottom, runs left to
//! right), then all vertical words (columns left to right, runs top to bottom).

use std::collections::BTreeSet;

use crate::types::{Cell, Grid, Point, WordDirection, WordResult};

/// Minimum run length that counts as a word
pub const MIN_WORD_LEN: usize = 2;

/// Find every word on the board
///
/// # Examples
///
/// ```
/// use word_tiles_core::types::Grid;
/// use word_tiles_core::words::find_words;
///
/// let board = Grid::parse(&["hello.world"]);
/// let texts: Vec<_> = find_words(&board).into_iter().map(|w| w.text).collect();
/// assert_eq!(texts, vec!["hello", "world"]);
/// ```
pub fn find_words(board: &Grid) -> Vec<WordResult> {
    let mut words = Vec::new();

    for (y, row) in board.rows().iter().enumerate() {
        let line = row
            .iter()
            .enumerate()
            .map(|(x, cell)| (Point::new(x as i32, y as i32), *cell));
        collect_runs(line, WordDirection::Horizontal, &mut words);
    }

    for x in 0..board.width() {
        let line = board.rows().iter().enumerate().map(|(y, row)| {
            (
                Point::new(x as i32, y as i32),
                row.get(x).copied().flatten(),
            )
        });
        collect_runs(line, WordDirection::Vertical, &mut words);
    }

    words
}

/// Split one line of cells on empty cells and keep runs long enough to be words
fn collect_runs(
    line: impl Iterator<Item = (Point, Cell)>,
    direction: WordDirection,
    words: &mut Vec<WordResult>,
) {
    let mut text = String::new();
    let mut cells = Vec::new();

    for (point, cell) in line {
        match cell {
            Some(letter) => {
                text.push(letter);
                cells.push(point);
            }
            None => flush_run(&mut text, &mut cells, direction, words),
        }
    }
    flush_run(&mut text, &mut cells, direction, words);
}

fn flush_run(
    text: &mut String,
    cells: &mut Vec<Point>,
    direction: WordDirection,
    words: &mut Vec<WordResult>,
) {
    if cells.len() >= MIN_WORD_LEN {
        words.push(WordResult {
            text: std::mem::take(text),
            direction,
            cells: std::mem::take(cells),
        });
    } else {
        text.clear();
        cells.clear();
    }
}

/// Check whether the words on the board are exactly the target words
///
/// Comparison is by text only, case-sensitive, with duplicates ignored on both
/// sides.
///
/// # Examples
///
/// ```
/// use word_tiles_core::types::Grid;
/// use word_tiles_core::words::{find_words, is_solved};
///
/// let board = Grid::parse(&["cat", "a..", "b.."]);
/// let found = find_words(&board);
/// assert!(is_solved(&found, ["cat", "cab"]));
/// assert!(!is_solved(&found, ["cat"]));
/// ```
pub fn is_solved<'a>(found: &[WordResult], targets: impl IntoIterator<Item = &'a str>) -> bool {
    let found: BTreeSet<&str> = found.iter().map(|word| word.text.as_str()).collect();
    let targets: BTreeSet<&str> = targets.into_iter().collect();
    !targets.is_empty() && found == targets
}
