use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use connect_four_search::ai::{Agent, AlphaBetaAgent, RandomAgent, SearchEngine};
use connect_four_search::config::AppConfig;
use connect_four_search::game::{MatchSession, Outcome, Piece, Scoreboard};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    Random,
    AlphaBeta,
}

/// Play headless matches and print minimax vs alpha-beta timings per AI turn.
#[derive(Parser)]
#[command(name = "compare", about = "Compare minimax and alpha-beta search times")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of matches
    #[arg(long)]
    games: Option<usize>,

    /// Override the search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Who plays the human side
    #[arg(long, value_enum, default_value = "random")]
    opponent: Opponent,

    /// Only print the per-match summary lines
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(games) = cli.games {
        config.compare.games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.session.seed = Some(seed);
    }
    config.validate().context("validating configuration")?;

    let mut rng = match config.session.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut opponent: Box<dyn Agent> = match cli.opponent {
        Opponent::Random => match config.session.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed.wrapping_add(1))),
            None => Box::new(RandomAgent::new()),
        },
        Opponent::AlphaBeta => Box::new(AlphaBetaAgent::new(
            SearchEngine::new(config.search.depth),
            Piece::Player,
        )),
    };
    let engine = SearchEngine::new(config.search.depth);

    println!(
        "AI (depth {}) vs {} over {} match(es)",
        engine.depth(),
        opponent.name(),
        config.compare.games
    );
    println!("-------------------------------------------");

    let mut scores = Scoreboard::default();
    let mut total_minimax = Duration::ZERO;
    let mut total_alpha_beta = Duration::ZERO;
    let mut session = MatchSession::new(config.session.first_player.resolve(&mut rng));

    for game in 1..=config.compare.games {
        if game > 1 {
            session.reset(config.session.first_player.resolve(&mut rng));
        }
        let first = session.to_move();

        let outcome = loop {
            if let Some(outcome) = session.outcome() {
                break outcome;
            }
            match session.to_move() {
                Piece::Ai => {
                    session.play_ai(&engine)?;
                }
                Piece::Player => {
                    let Some(col) = opponent.select_column(session.board()) else {
                        bail!("{} found no column on a live board", opponent.name());
                    };
                    session.play_human(col)?;
                }
            }
        };
        scores.record(outcome);

        let timings = session.timings();
        total_minimax += timings.total_minimax();
        total_alpha_beta += timings.total_alpha_beta();

        let result = match outcome {
            Outcome::Winner(Piece::Ai) => "AI wins",
            Outcome::Winner(Piece::Player) => "opponent wins",
            Outcome::Draw => "tie",
        };
        println!(
            "Match {game}: {} opened, {result} after {} AI turns",
            first.name(),
            timings.len()
        );
        if !cli.quiet {
            print!("{timings}");
            println!();
        }
    }

    println!("-------------------------------------------");
    println!(
        "AI {}  |  Opponent {}  |  Ties {}",
        scores.ai_wins, scores.player_wins, scores.draws
    );
    println!(
        "Total search time: minimax {:.5}s, alpha-beta {:.5}s",
        total_minimax.as_secs_f64(),
        total_alpha_beta.as_secs_f64()
    );
    if !total_alpha_beta.is_zero() {
        println!(
            "Alpha-beta speedup: {:.1}x",
            total_minimax.as_secs_f64() / total_alpha_beta.as_secs_f64()
        );
    }

    Ok(())
}
