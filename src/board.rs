//! Game board state: the fleet, the shots received, and the read-only view
//! handed to renderers.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::cellset::CellSet;
use crate::common::{BoardError, ShotOutcome, SnapshotError};
use crate::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPTS};
use crate::geometry::{coord_in_bounds, neighbors8, Coord};
use crate::ship::{run_cells, Orientation, Ship, ShipSnapshot, ShipType};

/// One player's waters: placed ships and every shot fired at them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    ships: Vec<Ship>,
    shots: CellSet,
}

impl Board {
    /// Create an empty board (no ships placed, no shots).
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Every coordinate shot at this board so far.
    pub fn shots(&self) -> CellSet {
        self.shots
    }

    /// Union of all ship cells.
    pub fn occupied(&self) -> CellSet {
        self.ships
            .iter()
            .flat_map(|s| s.cells().iter().copied())
            .collect()
    }

    fn cells_fit(&self, cells: &[Coord]) -> Result<(), BoardError> {
        if !cells.iter().all(|&c| coord_in_bounds(c)) {
            return Err(BoardError::ShipOutOfBounds);
        }
        let occupied = self.occupied();
        let touches = cells.iter().any(|&(r, c)| {
            occupied.contains((r, c)) || neighbors8(r, c).into_iter().any(|n| occupied.contains(n))
        });
        if touches {
            return Err(BoardError::ShipTooClose);
        }
        Ok(())
    }

    /// `true` if a ship of `size` laid from `start` stays on the grid and
    /// keeps a one-cell gap (diagonals included) from every placed ship.
    pub fn can_place(&self, size: usize, start: Coord, orientation: Orientation) -> bool {
        self.cells_fit(&run_cells(size, start, orientation)).is_ok()
    }

    /// Place a ship at `start` after checking the placement rules.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        start: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.cells_fit(&run_cells(ship_type.length(), start, orientation))?;
        self.ships.push(Ship::place(ship_type, start, orientation));
        Ok(())
    }

    /// Returns a random `(start, orientation)` for a ship of `ship_type`
    /// that satisfies [`Board::can_place`], trying at most
    /// `PLACEMENT_ATTEMPTS` draws.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Coord, Orientation), BoardError> {
        let len = ship_type.length();
        if len == 0 || len > BOARD_SIZE {
            return Err(BoardError::PlacementExhausted {
                ship: ship_type.name(),
            });
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (BOARD_SIZE, BOARD_SIZE - len + 1),
                Orientation::Vertical => (BOARD_SIZE - len + 1, BOARD_SIZE),
            };
            let start = (rng.random_range(0..max_r), rng.random_range(0..max_c));
            if self.can_place(len, start, orient) {
                return Ok((start, orient));
            }
        }
        log::warn!(
            "gave up placing {} after {} attempts",
            ship_type.name(),
            PLACEMENT_ATTEMPTS
        );
        Err(BoardError::PlacementExhausted {
            ship: ship_type.name(),
        })
    }

    /// Lay out the whole fleet at random. Failure means the board and fleet
    /// sizes cannot coexist and is not worth retrying.
    pub fn place_random_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for def in FLEET {
            let (start, orient) = self.random_placement(rng, def)?;
            log::debug!("placed {} at {:?} {:?}", def.name(), start, orient);
            self.ships.push(Ship::place(def, start, orient));
        }
        Ok(())
    }

    /// Resolve a shot at `coord`.
    pub fn receive_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !self.shots.insert(coord)? {
            return Ok(ShotOutcome::AlreadyShot);
        }
        // adjacency exclusion guarantees at most one ship per cell
        let Some(ship) = self.ships.iter_mut().find(|s| s.contains(coord)) else {
            return Ok(ShotOutcome::Miss);
        };
        ship.register_hit(coord);
        if ship.is_sunk() {
            Ok(ShotOutcome::Sunk(ship.name()))
        } else {
            Ok(ShotOutcome::Hit(ship.name()))
        }
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Number of ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// `(name, size, sunk)` for each ship in fleet order.
    pub fn fleet_status(&self) -> impl Iterator<Item = (&'static str, usize, bool)> + '_ {
        self.ships.iter().map(|s| (s.name(), s.size(), s.is_sunk()))
    }

    /// Display-ready projection. Unshot ship cells show as
    /// [`CellView::Ship`] only when `reveal` is set.
    pub fn view(&self, reveal: bool) -> BoardView {
        let occupied = self.occupied();
        let mut cells = [[CellView::Unknown; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let coord = (r, c);
                *cell = match (self.shots.contains(coord), occupied.contains(coord)) {
                    (true, true) => CellView::Hit,
                    (true, false) => CellView::Miss,
                    (false, true) if reveal => CellView::Ship,
                    _ => CellView::Unknown,
                };
            }
        }
        BoardView { cells }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  shots: {:?}\n}}",
            self.ships, self.shots
        )
    }
}

/// What a single cell shows to a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Not shot at, and either empty or hidden.
    Unknown,
    /// Shot at, nothing there.
    Miss,
    /// Shot at, ship struck.
    Hit,
    /// Not shot at, ship present (revealed views only).
    Ship,
}

impl CellView {
    pub fn symbol(self) -> char {
        match self {
            CellView::Unknown => '.',
            CellView::Miss => 'o',
            CellView::Hit => 'X',
            CellView::Ship => '#',
        }
    }
}

/// Grid of [`CellView`]s produced by [`Board::view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: [[CellView; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardView {
    pub fn get(&self, (row, col): Coord) -> Option<CellView> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[[CellView; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

/// Serializable board state for saving games.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub ships: Vec<ShipSnapshot>,
    pub shots: Vec<Coord>,
}

impl From<&Board> for BoardSnapshot {
    fn from(b: &Board) -> Self {
        BoardSnapshot {
            ships: b.ships.iter().map(ShipSnapshot::from).collect(),
            shots: b.shots.iter().collect(),
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = SnapshotError;

    fn try_from(state: BoardSnapshot) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for snap in state.ships {
            let ship = Ship::try_from(snap)?;
            if board.ships.iter().any(|s| s.name() == ship.name()) {
                return Err(SnapshotError::DuplicateShip { ship: ship.name() });
            }
            board.cells_fit(ship.cells())?;
            board.ships.push(ship);
        }
        board.shots = CellSet::try_from_cells(state.shots)?;
        // a ship's hits are exactly its shot cells
        for ship in &board.ships {
            let shot_cells = ship
                .cells()
                .iter()
                .filter(|&&c| board.shots.contains(c))
                .count();
            if shot_cells != ship.hit_count() || ship.hits().any(|h| !board.shots.contains(h)) {
                return Err(SnapshotError::ShotRecordMismatch { ship: ship.name() });
            }
        }
        Ok(board)
    }
}
