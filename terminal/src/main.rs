use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use minesweeper_core::{Board, Game};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{Level, info};

mod config;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    board: config::BoardArgs,

    /// JSON file with `width`, `height`, `mines` and `placement`
    #[arg(short, long, env = "MINESWEEPER_CONFIG")]
    config: Option<PathBuf>,

    /// Force a seed instead of random
    #[arg(short, long, env = "MINESWEEPER_SEED")]
    seed: Option<u64>,

    /// What log level to use
    #[arg(long, env = "MINESWEEPER_LOG", default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level)
        .init();

    let params = args.board.apply(config::load(args.config.as_deref())?);
    let board = match args.seed {
        Some(seed) => Board::with_rng(&params, &mut StdRng::seed_from_u64(seed))?,
        None => Board::new(&params)?,
    };
    info!(
        "Starting {}x{} game with {} mines",
        board.width(),
        board.height(),
        board.mine_count()
    );

    let mut game = Game::new(board);
    let mut stdout = io::stdout();
    let status = session::play(&mut game, io::stdin().lock(), &mut stdout)?;
    info!(?status, "Game over");
    session::finish(&mut game, &mut stdout)?;

    Ok(())
}
