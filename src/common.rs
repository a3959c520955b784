//! Common types for salvo: shot outcomes and the error enums shared by the
//! board, the match controller and snapshot restoration.

use alloc::string::String;
use core::fmt;

use crate::game::Side;

/// Result of a shot fired at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell had already been shot; nothing changed.
    AlreadyShot,
    /// The shot landed in open water.
    Miss,
    /// The shot struck the named ship without sinking it.
    Hit(&'static str),
    /// The shot struck the last intact cell of the named ship.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit(_) | ShotOutcome::Sunk(_))
    }

    /// Name of the ship that was struck, if any.
    pub fn ship_name(&self) -> Option<&'static str> {
        match self {
            ShotOutcome::Hit(name) | ShotOutcome::Sunk(name) => Some(name),
            ShotOutcome::AlreadyShot | ShotOutcome::Miss => None,
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Part of the ship would lie outside the grid.
    ShipOutOfBounds,
    /// Ship would overlap or touch (diagonals included) another ship.
    ShipTooClose,
    /// Random placement ran out of attempts for the named ship.
    PlacementExhausted { ship: &'static str },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTooClose => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::PlacementExhausted { ship } => write!(
                f,
                "unable to place {} after {} attempts; board and fleet sizes are incompatible",
                ship,
                crate::config::PLACEMENT_ATTEMPTS
            ),
        }
    }
}

/// Errors returned by the match controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The match already has a winner.
    GameOver,
    /// A computer move was requested while a human is to act.
    NotComputerTurn,
    /// A target was supplied while the computer is to act.
    ComputerTurn,
    /// The underlying board rejected the operation.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "the match is already over"),
            GameError::NotComputerTurn => write!(f, "it is not the computer's turn"),
            GameError::ComputerTurn => write!(f, "the computer picks its own targets"),
            GameError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

/// Errors found while rebuilding a match from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Ship name is not part of the fleet table.
    UnknownShip(String),
    /// Ship size disagrees with the fleet table or with its cell list.
    SizeMismatch { ship: &'static str },
    /// Ship cells do not form the straight run the ship was placed as.
    MalformedShip { ship: &'static str },
    /// A recorded hit is not one of the ship's cells.
    HitOutsideShip { ship: &'static str },
    /// A ship's hits disagree with the shots recorded on its board.
    ShotRecordMismatch { ship: &'static str },
    /// The same fleet entry appears twice on one board.
    DuplicateShip { ship: &'static str },
    /// A shot, cell or AI coordinate lies outside the grid.
    CellOutOfBounds { row: usize, col: usize },
    /// AI memory is present without a computer opponent, or missing with one.
    AiMismatch,
    /// Recorded winner disagrees with which fleets are sunk.
    WinnerMismatch { winner: Option<Side> },
    /// Placement rules rejected a restored ship.
    Board(BoardError),
}

impl From<BoardError> for SnapshotError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds { row, col } => SnapshotError::CellOutOfBounds { row, col },
            other => SnapshotError::Board(other),
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::UnknownShip(name) => write!(f, "unknown ship '{}'", name),
            SnapshotError::SizeMismatch { ship } => write!(f, "{} has the wrong size", ship),
            SnapshotError::MalformedShip { ship } => {
                write!(f, "{} cells are not a straight contiguous run", ship)
            }
            SnapshotError::HitOutsideShip { ship } => {
                write!(f, "{} records a hit outside its cells", ship)
            }
            SnapshotError::ShotRecordMismatch { ship } => {
                write!(f, "{} hits disagree with the board's shots", ship)
            }
            SnapshotError::DuplicateShip { ship } => write!(f, "{} appears twice", ship),
            SnapshotError::CellOutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            SnapshotError::AiMismatch => {
                write!(f, "AI memory must be present exactly for vs-computer matches")
            }
            SnapshotError::WinnerMismatch { winner: Some(side) } => write!(
                f,
                "side {} is recorded as winner but the opposing fleet is afloat",
                side.number()
            ),
            SnapshotError::WinnerMismatch { winner: None } => {
                write!(f, "match is recorded as ongoing but a fleet is sunk")
            }
            SnapshotError::Board(e) => write!(f, "invalid fleet: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
#[cfg(feature = "std")]
impl std::error::Error for SnapshotError {}
