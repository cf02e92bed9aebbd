//! Word finding tests

use word_tiles::core::{find_words, is_solved};
use word_tiles::types::{Grid, Point, WordDirection};

#[test]
fn test_single_row_two_words() {
    let board = Grid::parse(&["hello.world"]);
    let words = find_words(&board);
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].text, "hello");
    assert_eq!(words[1].text, "world");
    assert!(words.iter().all(|w| w.direction == WordDirection::Horizontal));
    assert_eq!(words[1].cells.first(), Some(&Point::new(6, 0)));
    assert_eq!(words[1].cells.last(), Some(&Point::new(10, 0)));
}

#[test]
fn test_crossing_words() {
    let board = Grid::parse(&[
        ".s....",
        "parsle",
        ".g....",
        ".e....",
    ]);
    let words = find_words(&board);
    let summary: Vec<_> = words
        .iter()
        .map(|w| (w.text.as_str(), w.direction))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("parsle", WordDirection::Horizontal),
            ("sage", WordDirection::Vertical),
        ]
    );
    assert_eq!(
        words[1].cells,
        vec![
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(1, 3),
        ]
    );
}

#[test]
fn test_order_rows_then_columns() {
    let board = Grid::parse(&["ab.", "...", "cd.", "e.."]);
    let texts: Vec<_> = find_words(&board).into_iter().map(|w| w.text).collect();
    assert_eq!(texts, vec!["ab", "cd", "ce"]);
}

#[test]
fn test_empty_board_has_no_words() {
    assert!(find_words(&Grid::empty(5)).is_empty());
    assert!(find_words(&Grid::default()).is_empty());
}

#[test]
fn test_adjacent_parallel_words_form_columns_too() {
    let board = Grid::parse(&["ab", "cd"]);
    let texts: Vec<_> = find_words(&board).into_iter().map(|w| w.text).collect();
    assert_eq!(texts, vec!["ab", "cd", "ac", "bd"]);
}

#[test]
fn test_win_check() {
    let board = Grid::parse(&["sage", "a...", "g...", "e..."]);
    let found = find_words(&board);
    assert!(is_solved(&found, ["sage"]));
    assert!(!is_solved(&found, ["sage", "thyme"]));
    assert!(!is_solved(&found, ["Sage"]));
}
