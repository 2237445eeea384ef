use std::io;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    init_logging, play_session,
    setup::{prompt_config, SetupPreset},
    AiPlayer, BoardView, CliPlayer, GameConfig, GameEngine, Side, DEFAULT_BOARD_SIZE, DEFAULT_SHIPS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer. Missing or invalid setup values are asked for.
    Play {
        #[arg(long, help = "Board size (2 to 10)")]
        size: Option<usize>,
        #[arg(long, help = "Ships per side (1 to a third of the board)")]
        ships: Option<usize>,
        #[arg(long, help = "Number of rounds to play, scores are totalled")]
        rounds: Option<u32>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000, help = "Pause before the computer's shot, in milliseconds")]
        delay_ms: u64,
        #[arg(long, help = "Wait for Enter after each exchange of shots")]
        confirm_turns: bool,
    },
    /// Watch the computer play against itself.
    Local {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_SHIPS)]
        ships: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn print_final_boards(engine: &GameEngine, player_label: &str, opponent_label: &str) {
    println!("\n--- GAME OVER ---");
    println!("{} final board:", player_label);
    print!("{}", BoardView::revealed(engine.board(Side::Player)));
    println!("\n{} final board:", opponent_label);
    print!("{}", BoardView::revealed(engine.board(Side::Opponent)));
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            ships,
            rounds,
            seed,
            delay_ms,
            confirm_turns,
        } => {
            println!("--- Welcome to Battleship! ---");
            let mut input = io::stdin().lock();
            let preset = SetupPreset { size, ships, rounds };
            let Some(config) = prompt_config(&mut input, &mut io::stdout(), preset)? else {
                println!("\nSetup cancelled.");
                return Ok(());
            };
            let mut rng = make_rng(seed);

            let mut human =
                CliPlayer::with_io(input, io::stdout())
                    .with_pause(Duration::from_millis(delay_ms))
                    .with_confirm_turns(confirm_turns);
            let mut computer = AiPlayer::new();
            let score = play_session(&config, [&mut human, &mut computer], &mut rng, |round, engine| {
                if config.rounds > 1 {
                    println!("\n=== Round {} of {} finished ===", round, config.rounds);
                }
                print_final_boards(engine, "Your", "Computer's");
                match engine.winner() {
                    Some(Side::Player) => println!("\nYou have sunk all the computer's ships! YOU WIN!"),
                    Some(Side::Opponent) => println!("\nThe computer has sunk all your ships! You lose."),
                    None => {}
                }
            })
            .map_err(|e| anyhow::anyhow!(e))?;

            if score.abandoned {
                println!("\nGame abandoned.");
            }
            if config.rounds > 1 {
                println!(
                    "\nFinal score after {} round(s) -> You: {} | Computer: {}",
                    score.rounds(),
                    score.wins(Side::Player),
                    score.wins(Side::Opponent)
                );
            }
        }
        Commands::Local { size, ships, seed } => {
            println!("Starting local AI vs AI game...");
            let config = GameConfig::new(size, ships, 1).map_err(|e| anyhow::anyhow!(e))?;
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::new(&config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut ai1 = AiPlayer::new();
            let mut ai2 = AiPlayer::new();
            let winner = engine
                .play([&mut ai1, &mut ai2], &mut rng)
                .ok_or_else(|| anyhow::anyhow!("game ended without a winner"))?;
            print_final_boards(&engine, "Player 1", "Player 2");
            let name = match winner {
                Side::Player => "Player 1",
                Side::Opponent => "Player 2",
            };
            println!("\n{} wins after {} shots.", name, engine.turns());
        }
    }
    Ok(())
}
