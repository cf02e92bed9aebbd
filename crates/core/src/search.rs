//! Search module - candidate offsets for nearest-position searches
//!
//! Candidates come in square rings of increasing Chebyshev distance. Within a
//! ring, offsets are ordered by Euclidean distance from the center, ties broken
//! row-major, so the first ring yields the four orthogonal neighbours before
//! the four diagonals. Boards are small, so each ring is built eagerly.

use crate::types::Point;

/// Offsets whose Chebyshev distance from the origin is exactly `distance`
///
/// # Examples
///
/// ```
/// use word_tiles_core::search::ring_offsets;
/// use word_tiles_core::types::Point;
///
/// let ring = ring_offsets(1);
/// assert_eq!(ring.len(), 8);
/// assert_eq!(&ring[..4], &[
///     Point::new(0, -1),
///     Point::new(-1, 0),
///     Point::new(1, 0),
///     Point::new(0, 1),
/// ]);
/// ```
pub fn ring_offsets(distance: i32) -> Vec<Point> {
    if distance <= 0 {
        return vec![Point::default()];
    }

    let mut offsets: Vec<Point> = (-distance..=distance)
        .flat_map(|dy| (-distance..=distance).map(move |dx| Point::new(dx, dy)))
        .filter(|offset| offset.x.abs() == distance || offset.y.abs() == distance)
        .collect();

    offsets.sort_by_key(|offset| offset.x * offset.x + offset.y * offset.y);
    offsets
}

/// Board positions on the ring at `distance` around `center`
pub fn ring_around(center: Point, distance: i32) -> impl Iterator<Item = Point> {
    ring_offsets(distance)
        .into_iter()
        .map(move |offset| center + offset)
}
