//! Headless self-play runner
//!
//! Usage: selfplay [num_games] [minimax|random-x|random-o] [--no-pruning]
//!
//! Prints the statistics as JSON and exits non-zero if the minimax player lost a game.

use std::env;
use tictactoe_minimax::config::GameConfig;
use tictactoe_minimax::player::ai::Searcher;
use tictactoe_minimax::selfplay::{run_selfplay, Matchup, SelfPlayConfig};
use tracing_subscriber::EnvFilter;

fn parse_matchup(arg: &str) -> anyhow::Result<Matchup> {
    match arg {
        "minimax" => Ok(Matchup::MinimaxVsMinimax),
        "random-o" => Ok(Matchup::MinimaxVsRandom),
        "random-x" => Ok(Matchup::RandomVsMinimax),
        other => Err(anyhow::anyhow!("unknown matchup '{}'", other)),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = GameConfig::load_or_default();
    let args: Vec<String> = env::args().skip(1).collect();
    let pruning = !args.iter().any(|a| a == "--no-pruning");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let num_games = match positional.first() {
        Some(n) => n.parse()?,
        None => config.selfplay.num_games,
    };
    let matchups = match positional.get(1) {
        Some(m) => vec![parse_matchup(m)?],
        None => Matchup::ALL.to_vec(),
    };

    let mut lost = false;
    for matchup in matchups {
        let stats = run_selfplay(&SelfPlayConfig {
            num_games,
            matchup,
            searcher: Searcher::new(config.scores, pruning && config.ai.pruning),
            seed: config.selfplay.seed,
        })?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        lost |= stats.minimax_losses() > 0;
    }

    if lost {
        eprintln!("minimax player lost at least one game");
        std::process::exit(1);
    }
    Ok(())
}
