#![cfg(feature = "std")]
//! Interactive terminal session over any `BufRead`/`Write` pair.
//!
//! Humans type moves such as `B7`, `save [file]`, `help` or `quit`; the
//! computer's turns are played without prompting. Invalid text and repeated
//! shots are reported and re-prompted without touching the match.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rand::Rng;

use crate::{
    common::ShotOutcome,
    game::{Controller, Game, Mode, Phase, Side, TurnReport},
    geometry::Coord,
    notation::{parse_coord, CoordLabel, CoordParseError},
    persist::{self, DEFAULT_SAVE_PATH},
    ui::render_player_view,
};

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fire(Coord),
    Save(PathBuf),
    Help,
    Quit,
}

/// Parse one input line. Commands are case-insensitive.
pub fn parse_command(line: &str) -> Result<Command, CoordParseError> {
    let line = line.trim();
    let mut parts = line.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or("");
    if head.eq_ignore_ascii_case("save") {
        let path = parts
            .next()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_SAVE_PATH);
        return Ok(Command::Save(PathBuf::from(path)));
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Ok(Command::Quit);
    }
    if line.eq_ignore_ascii_case("help") {
        return Ok(Command::Help);
    }
    parse_coord(line).map(Command::Fire)
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished { winner: Side },
    Quit,
    /// Input stream closed before the match ended.
    EndOfInput,
}

/// What to start from the opening menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setup {
    New(Mode),
    Load(PathBuf),
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Opening menu: `1` (or anything else) for vs-computer, `2` for two
/// players, `C` to load a save file.
pub fn choose_setup<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Setup> {
    writeln!(out, "=== SALVO ===")?;
    write!(out, "[1] Player vs Computer  [2] Two players  [C] Load game: ")?;
    out.flush()?;
    let choice = read_line(input)?.unwrap_or_default();
    if choice.eq_ignore_ascii_case("c") {
        write!(out, "Save file to load: ")?;
        out.flush()?;
        let path = read_line(input)?.unwrap_or_default();
        return Ok(Setup::Load(PathBuf::from(path)));
    }
    if choice == "2" {
        Ok(Setup::New(Mode::VsHuman))
    } else {
        Ok(Setup::New(Mode::VsComputer))
    }
}

/// Build the match for `setup`. A save file that cannot be loaded is
/// reported on `out` and replaced by a fresh vs-computer match.
pub fn start_game<G: Rng + ?Sized, W: Write>(
    setup: Setup,
    rng: &mut G,
    out: &mut W,
) -> anyhow::Result<Game> {
    match setup {
        Setup::New(mode) => Ok(Game::new(mode, rng)?),
        Setup::Load(path) => match persist::load(&path) {
            Ok(game) => {
                writeln!(out, "Loaded {}.", path.display())?;
                Ok(game)
            }
            Err(e) => {
                log::warn!("load failed: {:#}", e);
                writeln!(out, "Could not load {} ({:#}).", path.display(), e)?;
                writeln!(out, "Starting a new game against the computer.")?;
                Ok(Game::new(Mode::VsComputer, rng)?)
            }
        },
    }
}

fn side_label(game: &Game, side: Side) -> String {
    match (game.mode(), game.controller(side)) {
        (_, Controller::Computer) => "Computer".to_string(),
        (Mode::VsComputer, Controller::Human) => "You".to_string(),
        (Mode::VsHuman, Controller::Human) => format!("Player {}", side.number()),
    }
}

/// Human-readable description of a resolved shot.
pub fn describe_turn(game: &Game, report: &TurnReport) -> String {
    let who = side_label(game, report.shooter);
    let at = CoordLabel(report.target);
    match report.outcome {
        ShotOutcome::AlreadyShot => format!("{} already fired at {}.", who, at),
        ShotOutcome::Miss => format!("{} fired at {}: miss.", who, at),
        ShotOutcome::Hit(name) => format!("{} fired at {}: hit the {}!", who, at, name),
        ShotOutcome::Sunk(name) => format!("{} fired at {}: sank the {}!", who, at, name),
    }
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  A1..J10       fire at a cell (row letter, column number)")?;
    writeln!(out, "  save [file]   save the match (default {})", DEFAULT_SAVE_PATH)?;
    writeln!(out, "  help          show this text")?;
    writeln!(out, "  quit          leave the game")
}

/// Prompt the human on `side` until a fresh shot is fired or the session
/// stops. Returns `None` when a shot was fired.
fn human_turn<R: BufRead, W: Write>(
    game: &mut Game,
    side: Side,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<SessionEnd>> {
    if game.mode() == Mode::VsHuman {
        writeln!(out, "\n>>> Player {}, take the keyboard.", side.number())?;
    }
    writeln!(out)?;
    write!(
        out,
        "{}",
        render_player_view(game.board(side), game.board(side.opponent()))
    )?;
    loop {
        write!(out, "\nYour move (e.g. A5), 'save [file]', 'help' or 'quit': ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Some(SessionEnd::EndOfInput));
        };
        match parse_command(&line) {
            Ok(Command::Fire(target)) => {
                let report = game.resolve_turn(target)?;
                if report.outcome == ShotOutcome::AlreadyShot {
                    writeln!(out, "You already fired at {}. Pick another cell.", CoordLabel(target))?;
                    continue;
                }
                writeln!(out, "{}", describe_turn(game, &report))?;
                return Ok(None);
            }
            Ok(Command::Save(path)) => match persist::save(game, &path) {
                Ok(()) => writeln!(out, "Match saved to {}.", path.display())?,
                Err(e) => {
                    log::warn!("save failed: {:#}", e);
                    writeln!(out, "Save failed: {:#}", e)?;
                }
            },
            Ok(Command::Help) => print_help(out)?,
            Ok(Command::Quit) => {
                writeln!(out, "Goodbye!")?;
                return Ok(Some(SessionEnd::Quit));
            }
            Err(e) => {
                writeln!(out, "Invalid input: {}. Use A1..J10, 'save [file]' or 'quit'.", e)?;
            }
        }
    }
}

/// Play `game` until it finishes, the player quits, or input runs out.
pub fn run_session<R: BufRead, W: Write, G: Rng + ?Sized>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> anyhow::Result<SessionEnd> {
    loop {
        match game.phase() {
            Phase::Finished { winner } => {
                let who = side_label(game, winner);
                match game.controller(winner) {
                    Controller::Computer => writeln!(out, "\nGame over. The computer sank your fleet.")?,
                    Controller::Human if game.mode() == Mode::VsComputer => {
                        writeln!(out, "\nVictory! You sank the whole enemy fleet.")?
                    }
                    Controller::Human => writeln!(out, "\n{} wins!", who)?,
                }
                return Ok(SessionEnd::Finished { winner });
            }
            Phase::Turn(side) => match game.controller(side) {
                Controller::Computer => {
                    let report = game.play_computer_turn(rng)?;
                    if report.outcome == ShotOutcome::AlreadyShot {
                        anyhow::bail!("the computer found no unexplored cell to fire at");
                    }
                    writeln!(out, "{}", describe_turn(game, &report))?;
                }
                Controller::Human => {
                    if let Some(end) = human_turn(game, side, input, out)? {
                        return Ok(end);
                    }
                }
            },
        }
    }
}
