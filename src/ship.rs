//! Ship definitions: fleet entries and placed vessels with their hits.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::common::SnapshotError;
use crate::config::fleet_entry;
use crate::geometry::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the row, increasing column.
    Horizontal,
    /// Extends down the column, increasing row.
    Vertical,
}

impl Orientation {
    fn step(self) -> Coord {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Cells covered by a ship of `size` laid from `start`.
pub(crate) fn run_cells(size: usize, (row, col): Coord, orientation: Orientation) -> Vec<Coord> {
    let (dr, dc) = orientation.step();
    (0..size)
        .map(|i| (row.saturating_add(dr * i), col.saturating_add(dc * i)))
        .collect()
}

/// A ship laid on the board, with the cells it occupies and those hit so far.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    cells: Vec<Coord>,
    hits: BTreeSet<Coord>,
}

impl Ship {
    /// Lay a ship of `ship_type` from `start`. Bounds are the caller's
    /// concern: the board validates before placing.
    pub fn place(ship_type: ShipType, start: Coord, orientation: Orientation) -> Self {
        Ship {
            ship_type,
            cells: run_cells(ship_type.length(), start, orientation),
            hits: BTreeSet::new(),
        }
    }

    /// Record a hit at `coord`. Returns `true` if the coordinate belongs to
    /// the ship; hitting the same cell twice counts once.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if self.contains(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.ship_type.length()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    /// Occupied cells, in placement order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Hit cells, in row-major order.
    pub fn hits(&self) -> impl Iterator<Item = Coord> + '_ {
        self.hits.iter().copied()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", cells: {:?}, hits: {} }}",
            self.name(),
            self.cells,
            self.hits.len(),
        )
    }
}

/// Serializable ship state for saving games.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSnapshot {
    pub name: String,
    pub size: usize,
    pub cells: Vec<Coord>,
    pub hits: Vec<Coord>,
}

impl From<&Ship> for ShipSnapshot {
    fn from(ship: &Ship) -> Self {
        ShipSnapshot {
            name: ship.name().to_string(),
            size: ship.size(),
            cells: ship.cells.clone(),
            hits: ship.hits().collect(),
        }
    }
}

impl TryFrom<ShipSnapshot> for Ship {
    type Error = SnapshotError;

    fn try_from(snap: ShipSnapshot) -> Result<Self, Self::Error> {
        let ship_type = fleet_entry(&snap.name).ok_or(SnapshotError::UnknownShip(snap.name))?;
        let ship = ship_type.name();
        if snap.size != ship_type.length() || snap.cells.len() != snap.size {
            return Err(SnapshotError::SizeMismatch { ship });
        }
        let start = snap.cells[0];
        let straight = [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .any(|o| run_cells(snap.size, start, o) == snap.cells);
        if !straight {
            return Err(SnapshotError::MalformedShip { ship });
        }
        if snap.hits.iter().any(|h| !snap.cells.contains(h)) {
            return Err(SnapshotError::HitOutsideShip { ship });
        }
        Ok(Ship {
            ship_type,
            cells: snap.cells,
            hits: snap.hits.into_iter().collect(),
        })
    }
}
