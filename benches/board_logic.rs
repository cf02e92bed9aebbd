use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_tiles::core::{compose_board, find_words, outline, rotate_in_place, shift_tiles};
use word_tiles::engine::levels::by_index;
use word_tiles::types::{Grid, ShiftDirection, Tile};

fn level_tiles() -> (Vec<Tile>, usize) {
    let level = by_index(1).unwrap();
    (level.tiles, level.grid_size)
}

fn bench_compose(c: &mut Criterion) {
    let (tiles, size) = level_tiles();

    c.bench_function("compose_board", |b| {
        b.iter(|| compose_board(black_box(&tiles), size).unwrap())
    });
}

fn bench_find_words(c: &mut Criterion) {
    let (tiles, size) = level_tiles();
    let board = compose_board(&tiles, size).unwrap();

    c.bench_function("find_words", |b| b.iter(|| find_words(black_box(&board))));
}

fn bench_outline(c: &mut Criterion) {
    let grid = Grid::parse(&["ab..", "cde.", ".fgh", "..i."]);

    c.bench_function("outline", |b| b.iter(|| outline(black_box(&grid))));
}

fn bench_rotate_in_place(c: &mut Criterion) {
    let (tiles, size) = level_tiles();
    let board = compose_board(&tiles[1..], size).unwrap();

    c.bench_function("rotate_in_place", |b| {
        b.iter(|| {
            let mut tile = tiles[0].clone();
            rotate_in_place(&mut tile, black_box(&board)).unwrap()
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let (tiles, size) = level_tiles();

    c.bench_function("shift_down", |b| {
        b.iter(|| {
            let mut tiles = tiles.clone();
            shift_tiles(&mut tiles, black_box(ShiftDirection::Down), size).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_compose,
    bench_find_words,
    bench_outline,
    bench_rotate_in_place,
    bench_shift
);
criterion_main!(benches);
