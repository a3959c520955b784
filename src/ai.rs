// Hunt/target shot selection for the computer opponent.
//
// Hunting fires blindly over the even-parity checkerboard; every hit pushes
// the struck cell's orthogonal neighbours onto a LIFO stack which is drained
// before hunting resumes, so a discovered ship is followed along its line.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cellset::CellSet;
use crate::common::{ShotOutcome, SnapshotError};
use crate::geometry::{all_cells, coord_in_bounds, neighbors4, Coord};

/// Fallback when every cell has already been fired at.
const EXHAUSTED_FALLBACK: Coord = (0, 0);

/// Which phase the targeting logic is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    /// No live leads; searching the parity grid.
    Hunt,
    /// Working through neighbours of earlier hits.
    Target,
}

/// Last-in-first-out queue of coordinates to try next.
///
/// Entries are not deduplicated on push; stale ones are skipped when popped.
/// The stack can therefore outgrow the number of unexplored cells, which is
/// bounded in practice by four pushes per hit on a 10×10 grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateStack {
    items: Vec<Coord>,
}

impl CandidateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coord: Coord) {
        self.items.push(coord);
    }

    /// Most recently pushed entry.
    pub fn pop(&mut self) -> Option<Coord> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries from bottom (oldest) to top (next to pop).
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.items.iter().copied()
    }
}

impl FromIterator<Coord> for CandidateStack {
    /// Items are pushed in iteration order, so the last one is on top.
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        CandidateStack {
            items: iter.into_iter().collect(),
        }
    }
}

/// Targeting state for one computer-controlled side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingAi {
    candidates: CandidateStack,
    seen: CellSet,
}

impl TargetingAi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending candidates, bottom to top.
    pub fn candidates(&self) -> &CandidateStack {
        &self.candidates
    }

    /// Every coordinate this AI has already chosen.
    pub fn seen(&self) -> CellSet {
        self.seen
    }

    /// Current phase: `Target` while an unseen candidate remains stacked.
    pub fn mode(&self) -> AiMode {
        if self.candidates.iter().any(|c| !self.seen.contains(c)) {
            AiMode::Target
        } else {
            AiMode::Hunt
        }
    }

    fn take(&mut self, coord: Coord) -> bool {
        self.seen.insert(coord).unwrap_or(false)
    }

    /// Choose the next coordinate to fire at. Never repeats a coordinate
    /// while unseen cells remain.
    pub fn next_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Coord {
        while let Some(coord) = self.candidates.pop() {
            if self.take(coord) {
                log::debug!("ai targeting candidate {:?}", coord);
                return coord;
            }
        }

        let mut parity: Vec<Coord> = all_cells().filter(|&(r, c)| (r + c) % 2 == 0).collect();
        parity.shuffle(rng);
        if let Some(coord) = parity.into_iter().find(|&c| !self.seen.contains(c)) {
            self.seen.insert(coord).ok();
            log::debug!("ai hunting at {:?}", coord);
            return coord;
        }

        if let Some(coord) = all_cells().find(|&c| !self.seen.contains(c)) {
            self.seen.insert(coord).ok();
            return coord;
        }

        log::warn!("ai has fired at every cell; falling back to {:?}", EXHAUSTED_FALLBACK);
        EXHAUSTED_FALLBACK
    }

    /// Learn from the outcome of a shot at `coord`. Hits and sinks stack the
    /// orthogonal neighbours; misses and repeats are ignored.
    pub fn feedback(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit(_) | ShotOutcome::Sunk(_) => {
                for n in neighbors4(coord.0, coord.1) {
                    self.candidates.push(n);
                }
            }
            ShotOutcome::Miss | ShotOutcome::AlreadyShot => {}
        }
    }
}

/// Serializable AI memory for saving games.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AiSnapshot {
    /// Bottom to top.
    pub candidates: Vec<Coord>,
    pub seen: Vec<Coord>,
}

impl From<&TargetingAi> for AiSnapshot {
    fn from(ai: &TargetingAi) -> Self {
        AiSnapshot {
            candidates: ai.candidates.iter().collect(),
            seen: ai.seen.iter().collect(),
        }
    }
}

impl TryFrom<AiSnapshot> for TargetingAi {
    type Error = SnapshotError;

    fn try_from(snap: AiSnapshot) -> Result<Self, Self::Error> {
        if let Some(&(row, col)) = snap.candidates.iter().find(|&&c| !coord_in_bounds(c)) {
            return Err(SnapshotError::CellOutOfBounds { row, col });
        }
        Ok(TargetingAi {
            candidates: snap.candidates.into_iter().collect(),
            seen: CellSet::try_from_cells(snap.seen)?,
        })
    }
}
