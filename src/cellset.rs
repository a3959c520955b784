//! A fixed-size set of grid coordinates packed into a `u128`.
//!
//! The 10×10 grid needs 100 bits, so one machine integer holds every shot,
//! hit or visited cell without heap allocation. Cells are indexed
//! row-major: bit `row * BOARD_SIZE + col`.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::geometry::Coord;

const CAPACITY: usize = BOARD_SIZE * BOARD_SIZE;
const _: () = assert!(CAPACITY <= u128::BITS as usize);

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// Empty set.
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    #[inline]
    fn index((row, col): Coord) -> Result<usize, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            Err(BoardError::OutOfBounds { row, col })
        } else {
            Ok(row * BOARD_SIZE + col)
        }
    }

    /// Membership test; out-of-range coordinates are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        Self::index(coord)
            .map(|idx| (self.bits >> idx) & 1 == 1)
            .unwrap_or(false)
    }

    /// Add `coord`, returning `true` if it was not already present.
    pub fn insert(&mut self, coord: Coord) -> Result<bool, BoardError> {
        let bit = 1u128 << Self::index(coord)?;
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        Ok(fresh)
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Members in row-major order.
    pub fn iter(&self) -> Cells {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }

    /// Build a set from coordinates, rejecting any outside the grid.
    pub fn try_from_cells<I>(cells: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut set = Self::new();
        for coord in cells {
            set.insert(coord)?;
        }
        Ok(set)
    }
}

/// Collects in-range coordinates; out-of-range ones are dropped.
impl FromIterator<Coord> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = Self::new();
        for coord in iter {
            let _ = set.insert(coord);
        }
        set
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells {
    bits: u128,
    idx: usize,
}

impl Iterator for Cells {
    type Item = Coord;
    fn next(&mut self) -> Option<Coord> {
        while self.idx < CAPACITY {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & 1 == 1 {
                return Some((idx / BOARD_SIZE, idx % BOARD_SIZE));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Coord;
    type IntoIter = Cells;
    fn into_iter(self) -> Cells {
        self.iter()
    }
}
