use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{AiPlayer, GameConfig, GameEngine, Side, DEFAULT_BOARD_SIZE, DEFAULT_SHIPS};
use serde_json::json;

/// Play one computer-vs-computer game and print a JSON summary.
#[derive(Parser)]
struct Args {
    seed: u64,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    #[arg(long, default_value_t = DEFAULT_SHIPS)]
    ships: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = GameConfig::new(args.size, args.ships, 1).map_err(|e| anyhow::anyhow!(e))?;

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut engine = GameEngine::new(&config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let winner = engine
        .play([&mut p1, &mut p2], &mut rng)
        .ok_or_else(|| anyhow::anyhow!("game ended without a winner"))?;

    let result = json!({
        "winner": winner,
        "turns": engine.turns(),
        "ships_left": {
            "player": engine.remaining(Side::Player),
            "opponent": engine.remaining(Side::Opponent),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
