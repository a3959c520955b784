#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use salvo::cli::{choose_setup, run_session, start_game, SessionEnd, Setup};
#[cfg(feature = "std")]
use salvo::{init_logging, Mode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(
        long,
        global = true,
        help = "Fix RNG seed for reproducible games (e.g., --seed 12345)"
    )]
    seed: Option<u64>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Computer,
    /// Two players taking turns at the same terminal.
    Versus,
    /// Resume a saved match (falls back to a new game against the computer).
    Load { path: PathBuf },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let setup = match cli.command {
        Some(Commands::Computer) => Setup::New(Mode::VsComputer),
        Some(Commands::Versus) => Setup::New(Mode::VsHuman),
        Some(Commands::Load { path }) => Setup::Load(path),
        None => choose_setup(&mut input, &mut out)?,
    };
    let mut game = start_game(setup, &mut rng, &mut out)?;

    match run_session(&mut game, &mut input, &mut out, &mut rng)? {
        SessionEnd::Finished { .. } | SessionEnd::Quit => {}
        SessionEnd::EndOfInput => println!("\nInput closed; leaving the match unfinished."),
    }
    Ok(())
}
