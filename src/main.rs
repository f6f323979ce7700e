use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use npuzzle::{read_board, render, Board, Solver};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "npuzzle", version, about = "Solve N-puzzles optimally with A*")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the puzzle stored in a text file
    Solve {
        /// Puzzle file: N followed by N*N tiles, 0 for the blank
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Give up after this many node expansions
        #[arg(long, value_name = "N")]
        max_expansions: Option<usize>,
        /// Print the tile moves instead of every intermediate board
        #[arg(long)]
        directions: bool,
        /// Highlight the blank and the moved tile
        #[arg(long)]
        color: bool,
    },
    /// Print a random solvable board
    Random {
        /// Board dimension
        #[arg(long, default_value_t = 3)]
        size: usize,
        /// Seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,
        /// Solve the generated board as well
        #[arg(long)]
        solve: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Solve {
            input,
            max_expansions,
            directions,
            color,
        } => {
            let board = read_board(&input)?;
            tracing::info!(path = %input.display(), size = board.dimension(), "Loaded puzzle");
            let solver = match max_expansions {
                Some(max) => Solver::with_max_expansions(&board, max)?,
                None => Solver::new(&board)?,
            };
            let stats = solver.stats();
            tracing::info!(
                total_expanded = stats.total_expanded(),
                expanded = stats.expanded,
                enqueued = stats.enqueued,
                twin_expanded = stats.twin_expanded,
                twin_enqueued = stats.twin_enqueued,
                "Search complete"
            );
            report(&solver, directions, color);
        }
        Command::Random { size, seed, solve } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let board = Board::random(size, &mut rng)?;
            print!("{}", board);
            if solve {
                report(&Solver::new(&board)?, true, false);
            }
        }
    }
    Ok(())
}

fn report(solver: &Solver, directions: bool, color: bool) {
    let (Some(moves), Some(boards)) = (solver.moves(), solver.solution()) else {
        println!("No solution possible");
        return;
    };

    println!("Minimum number of moves = {}", moves);
    if directions {
        for movement in solver.directions().unwrap_or_default() {
            println!("{}", movement);
        }
        return;
    }

    let mut previous: Option<&Board> = None;
    for board in &boards {
        let highlight = previous.and_then(|prev| render::moved_tile(prev, board));
        println!("{}\n{}", board.dimension(), render::render(board, highlight, color));
        previous = Some(board);
    }
}
