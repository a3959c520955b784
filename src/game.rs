//! Match controller: turn order, win detection and save snapshots.

use rand::Rng;

use crate::{
    ai::{AiSnapshot, TargetingAi},
    board::{Board, BoardSnapshot},
    common::{GameError, ShotOutcome, SnapshotError},
    config::BOARD_SIZE,
    geometry::Coord,
};

/// Who sits on side two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Side one is human, side two is the targeting AI.
    VsComputer,
    /// Two humans sharing the terminal.
    VsHuman,
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// 1-based seat number for display.
    pub fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

/// How a side chooses its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

/// Match state machine. Setup happens in the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for this side to fire.
    Turn(Side),
    /// The winner sank the whole opposing fleet.
    Finished { winner: Side },
}

/// What happened when a side fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
    /// Phase after the shot.
    pub phase: Phase,
}

/// Two boards, the turn state and the computer's memory when it plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    mode: Mode,
    phase: Phase,
    board_one: Board,
    board_two: Board,
    ai: Option<TargetingAi>,
}

impl Game {
    /// Start a match with an independently randomized fleet on each board.
    pub fn new<R: Rng + ?Sized>(mode: Mode, rng: &mut R) -> Result<Self, GameError> {
        let mut board_one = Board::new();
        board_one.place_random_fleet(rng)?;
        let mut board_two = Board::new();
        board_two.place_random_fleet(rng)?;
        log::info!("new {:?} match", mode);
        Ok(Self::from_boards(mode, board_one, board_two))
    }

    /// Start a match on already populated boards. Side one fires first.
    pub fn from_boards(mode: Mode, board_one: Board, board_two: Board) -> Self {
        let ai = match mode {
            Mode::VsComputer => Some(TargetingAi::new()),
            Mode::VsHuman => None,
        };
        Game {
            mode,
            phase: Phase::Turn(Side::One),
            board_one,
            board_two,
            ai,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side to act, or `None` once the match is over.
    pub fn active_side(&self) -> Option<Side> {
        match self.phase {
            Phase::Turn(side) => Some(side),
            Phase::Finished { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            Phase::Turn(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    pub fn controller(&self, side: Side) -> Controller {
        match (self.mode, side) {
            (Mode::VsComputer, Side::Two) => Controller::Computer,
            _ => Controller::Human,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.active_side()
            .is_some_and(|side| self.controller(side) == Controller::Computer)
    }

    /// The fleet belonging to `side` (the board its opponent fires at).
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::One => &self.board_one,
            Side::Two => &self.board_two,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::One => &mut self.board_one,
            Side::Two => &mut self.board_two,
        }
    }

    /// Targeting memory, present only in vs-computer matches.
    pub fn ai(&self) -> Option<&TargetingAi> {
        self.ai.as_ref()
    }

    /// Side to act after `shooter` has fired a fresh shot.
    fn next_turn(&self, shooter: Side) -> Side {
        match (self.mode, shooter) {
            // human and computer always alternate
            (Mode::VsComputer, Side::One) => Side::Two,
            (Mode::VsComputer, Side::Two) => Side::One,
            // the keyboard passes to the other player
            (Mode::VsHuman, Side::One) => Side::Two,
            (Mode::VsHuman, Side::Two) => Side::One,
        }
    }

    /// Fire a human side's shot at the opposing board.
    ///
    /// A repeated coordinate reports [`ShotOutcome::AlreadyShot`] and leaves
    /// the turn with the same side. The computer's targets only come from
    /// its own AI, so this refuses to act on its turn.
    pub fn resolve_turn(&mut self, target: Coord) -> Result<TurnReport, GameError> {
        let shooter = self.active_side().ok_or(GameError::GameOver)?;
        if self.controller(shooter) == Controller::Computer {
            return Err(GameError::ComputerTurn);
        }
        self.fire(shooter, target)
    }

    fn fire(&mut self, shooter: Side, target: Coord) -> Result<TurnReport, GameError> {
        let defender = shooter.opponent();
        let outcome = self.board_mut(defender).receive_shot(target)?;

        if self.controller(shooter) == Controller::Computer {
            if let Some(ai) = self.ai.as_mut() {
                ai.feedback(target, outcome);
            }
        }

        if outcome != ShotOutcome::AlreadyShot {
            // only the defender can have lost a ship this turn
            self.phase = if self.board(defender).all_sunk() {
                log::info!("side {} wins", shooter.number());
                Phase::Finished { winner: shooter }
            } else {
                Phase::Turn(self.next_turn(shooter))
            };
        }
        log::debug!(
            "side {} fired at {:?}: {:?}",
            shooter.number(),
            target,
            outcome
        );

        Ok(TurnReport {
            shooter,
            target,
            outcome,
            phase: self.phase,
        })
    }

    /// The computer's next target. Only valid while the computer is to act.
    pub fn computer_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotComputerTurn);
        }
        let ai = self.ai.as_mut().ok_or(GameError::NotComputerTurn)?;
        Ok(ai.next_shot(rng))
    }

    /// Let the computer pick a target and fire it.
    ///
    /// A restored AI whose memory lags the board can pick a cell that was
    /// already shot; it then picks again, up to once per cell. The last
    /// report is `AlreadyShot` only if no fresh cell was found.
    pub fn play_computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TurnReport, GameError> {
        let mut attempts = 0;
        loop {
            let target = self.computer_target(rng)?;
            let shooter = self.active_side().ok_or(GameError::GameOver)?;
            let report = self.fire(shooter, target)?;
            attempts += 1;
            if report.outcome != ShotOutcome::AlreadyShot || attempts >= BOARD_SIZE * BOARD_SIZE {
                return Ok(report);
            }
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let (active_side, winner) = match self.phase {
            Phase::Turn(side) => (side, None),
            Phase::Finished { winner } => (winner, Some(winner)),
        };
        GameSnapshot {
            mode: self.mode,
            active_side,
            winner,
            board_one: BoardSnapshot::from(&self.board_one),
            board_two: BoardSnapshot::from(&self.board_two),
            ai: self.ai.as_ref().map(AiSnapshot::from),
        }
    }

    /// Restore a match from a previously saved snapshot.
    pub fn from_snapshot(state: GameSnapshot) -> Result<Self, SnapshotError> {
        let ai = match (state.mode, state.ai) {
            (Mode::VsComputer, Some(snap)) => Some(TargetingAi::try_from(snap)?),
            (Mode::VsHuman, None) => None,
            _ => return Err(SnapshotError::AiMismatch),
        };
        let board_one = Board::try_from(state.board_one)?;
        let board_two = Board::try_from(state.board_two)?;
        let phase = match state.winner {
            Some(winner) => Phase::Finished { winner },
            None => Phase::Turn(state.active_side),
        };
        let game = Game {
            mode: state.mode,
            phase,
            board_one,
            board_two,
            ai,
        };
        // finished exactly when the loser's fleet is gone
        let consistent = match state.winner {
            Some(winner) => game.board(winner.opponent()).all_sunk(),
            None => !game.board_one.all_sunk() && !game.board_two.all_sunk(),
        };
        if !consistent {
            return Err(SnapshotError::WinnerMismatch {
                winner: state.winner,
            });
        }
        Ok(game)
    }
}

/// Serializable overall match state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub mode: Mode,
    pub active_side: Side,
    pub winner: Option<Side>,
    pub board_one: BoardSnapshot,
    pub board_two: BoardSnapshot,
    pub ai: Option<AiSnapshot>,
}
