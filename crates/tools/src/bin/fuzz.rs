use anyhow::{Result, bail};
use boardgen::{BoardConfig, BoardError, RandomSource, SeededRandom, generate_board};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{debug, info};
use tools::invariants::board_violations;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    boards: u32,
    /// Largest row or column count drawn for a board
    #[arg(long, default_value_t = 24)]
    max_side: usize,
}

fn random_config(rng: &mut SeededRandom, max_side: usize) -> BoardConfig {
    let rows = rng.range(1, max_side + 1);
    let cols = rng.range(1, max_side + 1);
    let wall_percent = rng.below(101) as u8;
    let hole_percent = rng.below(101 - usize::from(wall_percent)) as u8;
    let enemy_count = rng.below(rows * cols / 4 + 2);
    let spawn_clearance = rng.below(3);
    BoardConfig::new(rows, cols, wall_percent, hole_percent, enemy_count)
        .with_spawn_clearance(spawn_clearance)
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if args.max_side == 0 {
        bail!("--max-side must be at least 1");
    }

    info!("Starting board fuzz on seed {} for {} boards...", args.seed, args.boards);
    let mut config_rng = SeededRandom::new(args.seed);
    let mut generated = 0_u32;
    let mut quota_rejections = 0_u32;

    for board_index in 0..args.boards {
        let config = random_config(&mut config_rng, args.max_side);
        let mut board_rng = SeededRandom::for_board(args.seed, board_index);

        match generate_board(config, &mut board_rng) {
            Ok(board) => {
                let violations = board_violations(&board);
                if !violations.is_empty() {
                    bail!(
                        "board {board_index} ({config:?}) broke {} invariants: {violations:#?}",
                        violations.len()
                    );
                }
                generated += 1;
            }
            Err(BoardError::UnsatisfiableEnemyQuota { requested, available }) => {
                debug!("board {board_index}: {requested} enemies requested, {available} free cells");
                quota_rejections += 1;
            }
            Err(error) => bail!("board {board_index} ({config:?}) failed: {error}"),
        }
    }

    println!(
        "Fuzzing completed successfully: {generated} boards verified, {quota_rejections} quota rejections."
    );
    Ok(())
}
