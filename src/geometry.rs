//! Coordinates and neighbourhood helpers for the square grid.

use alloc::vec::Vec;

use crate::config::BOARD_SIZE;

/// `(row, col)` position, zero-indexed.
pub type Coord = (usize, usize);

/// King-move offsets in row-major order, centre excluded.
const OFFSETS8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal offsets: down, up, right, left.
const OFFSETS4: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// `true` iff both `row` and `col` lie in `[0, BOARD_SIZE)`.
pub fn in_bounds(row: isize, col: isize) -> bool {
    (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
}

/// `true` iff the coordinate lies on the grid.
pub fn coord_in_bounds((row, col): Coord) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

fn offset_cells(row: usize, col: usize, offsets: &[(isize, isize)]) -> Vec<Coord> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            in_bounds(r, c).then_some((r as usize, c as usize))
        })
        .collect()
}

/// The up to 8 in-bounds cells touching `(row, col)`, diagonals included.
pub fn neighbors8(row: usize, col: usize) -> Vec<Coord> {
    offset_cells(row, col, &OFFSETS8)
}

/// The up to 4 in-bounds cells sharing an edge with `(row, col)`.
pub fn neighbors4(row: usize, col: usize) -> Vec<Coord> {
    offset_cells(row, col, &OFFSETS4)
}

/// Every cell of the grid in row-major order.
pub fn all_cells() -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
}
