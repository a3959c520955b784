use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{Board, TargetingAi, BOARD_SIZE};
use serde_json::json;

/// Measure how many shots the targeting AI needs to sink a random fleet.
#[derive(Parser)]
struct Args {
    /// Number of boards to play out.
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn shots_to_sink(rng: &mut SmallRng) -> anyhow::Result<usize> {
    let mut board = Board::new();
    board.place_random_fleet(rng)?;
    let mut ai = TargetingAi::new();
    let mut shots = 0;
    while !board.all_sunk() {
        if shots > BOARD_SIZE * BOARD_SIZE {
            anyhow::bail!("AI exceeded one shot per cell");
        }
        let target = ai.next_shot(rng);
        let outcome = board.receive_shot(target)?;
        ai.feedback(target, outcome);
        shots += 1;
    }
    Ok(shots)
}

fn main() -> anyhow::Result<()> {
    salvo::init_logging();
    let args = Args::parse();
    if args.games == 0 {
        anyhow::bail!("--games must be at least 1");
    }
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut results = Vec::with_capacity(args.games);
    for _ in 0..args.games {
        results.push(shots_to_sink(&mut rng)?);
    }
    let total: usize = results.iter().sum();
    let min = results.iter().copied().min().unwrap_or(0);
    let max = results.iter().copied().max().unwrap_or(0);

    let result = json!({
        "games": args.games,
        "seed": args.seed,
        "mean_shots": total as f64 / args.games as f64,
        "min_shots": min,
        "max_shots": max,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
