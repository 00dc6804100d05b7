use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mineterm_core::{Game, Placement, RandomMineGenerator};
use std::io;

mod render;
mod session;
mod theme;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PlacementArg {
    /// Independent draws, repeats may leave fewer mines than requested
    Independent,
    /// Exactly the requested number of mines
    Distinct,
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Independent => Placement::Independent,
            PlacementArg::Distinct => Placement::Distinct,
        }
    }
}

/// Minesweeper in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Difficulty: 0 easy, 1 medium, 2 hard (asked for when omitted)
    #[arg(short, long)]
    difficulty: Option<u8>,

    /// Board size: 0 small, 1 normal, 2 large (asked for when omitted)
    #[arg(short, long)]
    size: Option<u8>,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,

    /// How mines are drawn
    #[arg(long, value_enum, default_value_t = PlacementArg::Independent)]
    placement: PlacementArg,

    /// Print the board without colours
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let theme = if args.no_color {
        theme::Theme::plain()
    } else {
        theme::Theme::default()
    };

    let stdin = io::stdin();
    let mut session = session::Session::new(stdin.lock(), io::stdout(), theme);

    let config = session.read_config(args.difficulty, args.size)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}, config: {:?}", seed, config);

    let mut game = Game::new(config, RandomMineGenerator::new(seed, args.placement.into()));
    log::info!(
        "started {:?} game with {} mines",
        config,
        game.mine_count()
    );

    session.run(&mut game).context("Game aborted")
}
