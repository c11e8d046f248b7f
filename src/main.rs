use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dubs_roller::{Session, SessionConfig, MAX_DICE};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every side is equally likely
    Fair,
    /// Rolls lean towards high values and towards matching dice
    BadGambler,
}

#[derive(Parser)]
#[command(name = "dubs-roller")]
#[command(version)]
#[command(about = "Roll labeled dice and go for Dubs, Trips and Quads")]
struct Cli {
    /// Number of dice to roll, asked for when missing
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_DICE as i64))]
    dice: Option<u32>,

    /// Number of sides on each die, asked for when missing
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    sides: Option<u32>,

    /// How the dice are rolled, asked for when missing
    #[arg(short, long, value_enum, env = "DUBS_ROLLER_MODE")]
    mode: Option<Mode>,

    /// Seed for reproducible rolls
    #[arg(long, env = "DUBS_ROLLER_SEED")]
    seed: Option<u64>,

    /// Show the first roll and exit without offering rerolls
    #[arg(long)]
    once: bool,

    /// Don't color the output
    #[arg(long)]
    no_color: bool,

    /// Don't clear the screen on start
    #[arg(long)]
    no_clear: bool,

    /// Log every roll to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose {
        "dubs_roller=debug"
    } else {
        "dubs_roller=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = SessionConfig {
        num_dice: cli.dice,
        num_sides: cli.sides,
        bad_gambler: cli.mode.map(|mode| mode == Mode::BadGambler),
        once: cli.once,
        color: !cli.no_color,
        clear_screen: !cli.no_clear,
    };

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), rng, config);
    session.run().context("dice session failed")?;

    Ok(())
}
