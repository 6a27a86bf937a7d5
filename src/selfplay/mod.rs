//! Batch games between computer players
//!
//! Games are independent, so they run in parallel; each game owns its board
//! and its random generator.

use crate::core::PlayerId;
use crate::game::Game;
use crate::logic::Outcome;
use crate::player::ai::Searcher;
use crate::player::{MinimaxAI, PlayerController, RandomAI};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Matchup {
    MinimaxVsMinimax,
    MinimaxVsRandom,
    RandomVsMinimax,
}

impl Matchup {
    pub const ALL: [Matchup; 3] = [
        Matchup::MinimaxVsMinimax,
        Matchup::MinimaxVsRandom,
        Matchup::RandomVsMinimax,
    ];

    fn controller(
        &self,
        player: PlayerId,
        searcher: Searcher,
        seed: u64,
    ) -> Box<dyn PlayerController> {
        let minimax = match (self, player) {
            (Matchup::MinimaxVsMinimax, _) => true,
            (Matchup::MinimaxVsRandom, p) => p == PlayerId::Player1,
            (Matchup::RandomVsMinimax, p) => p == PlayerId::Player2,
        };
        if minimax {
            Box::new(MinimaxAI::with_searcher(player, "Minimax", searcher))
        } else {
            Box::new(RandomAI::seeded(player, "Random", seed))
        }
    }
}

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub matchup: Matchup,
    pub searcher: Searcher,
    /// Game `i` seeds its random player with `seed + i`
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub moves: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub matchup: Matchup,
    pub started_at: String,
    pub total_games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub elapsed_ms: u128,
}

impl SelfPlayStats {
    pub fn new(matchup: Matchup) -> Self {
        Self {
            matchup,
            started_at: chrono::Local::now().to_rfc3339(),
            total_games: 0,
            p1_wins: 0,
            p2_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            elapsed_ms: 0,
        }
    }

    pub fn add_result(&mut self, result: &GameResult) {
        let total_moves = self.avg_moves * self.total_games as f64 + result.moves.len() as f64;
        self.total_games += 1;
        match result.outcome.winner() {
            Some(PlayerId::Player1) => self.p1_wins += 1,
            Some(PlayerId::Player2) => self.p2_wins += 1,
            None => self.draws += 1,
        }
        self.avg_moves = total_moves / self.total_games as f64;
    }

    /// Games won by a Random player against Minimax
    pub fn minimax_losses(&self) -> usize {
        match self.matchup {
            Matchup::MinimaxVsMinimax => 0,
            Matchup::MinimaxVsRandom => self.p2_wins,
            Matchup::RandomVsMinimax => self.p1_wins,
        }
    }
}

pub fn play_one(config: &SelfPlayConfig, game_index: usize) -> anyhow::Result<GameResult> {
    let seed = config.seed.wrapping_add(game_index as u64);
    let p1 = config
        .matchup
        .controller(PlayerId::Player1, config.searcher, seed);
    let p2 = config
        .matchup
        .controller(PlayerId::Player2, config.searcher, seed);

    let mut game = Game::new();
    let outcome = game.run_silent(p1.as_ref(), p2.as_ref())?;
    Ok(GameResult {
        outcome,
        moves: game.history,
    })
}

pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let start = Instant::now();
    let mut stats = SelfPlayStats::new(config.matchup);

    let results = (0..config.num_games)
        .into_par_iter()
        .map(|i| play_one(config, i))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for result in &results {
        stats.add_result(result);
    }
    stats.elapsed_ms = start.elapsed().as_millis();

    info!(
        matchup = ?stats.matchup,
        games = stats.total_games,
        p1_wins = stats.p1_wins,
        p2_wins = stats.p2_wins,
        draws = stats.draws,
        elapsed_ms = stats.elapsed_ms as u64,
        "self-play finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(matchup: Matchup, num_games: usize) -> SelfPlayConfig {
        SelfPlayConfig {
            num_games,
            matchup,
            searcher: Searcher::default(),
            seed: 11,
        }
    }

    #[test]
    fn test_minimax_never_loses_to_random() {
        for matchup in [Matchup::MinimaxVsRandom, Matchup::RandomVsMinimax] {
            let stats = run_selfplay(&config(matchup, 40)).unwrap();
            assert_eq!(stats.total_games, 40);
            assert_eq!(stats.minimax_losses(), 0, "{:?}", matchup);
            assert_eq!(stats.p1_wins + stats.p2_wins + stats.draws, 40);
        }
    }

    #[test]
    fn test_minimax_mirror_always_draws() {
        let stats = run_selfplay(&config(Matchup::MinimaxVsMinimax, 3)).unwrap();
        assert_eq!(stats.draws, 3);
        assert_eq!(stats.avg_moves, 9.0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let cfg = config(Matchup::MinimaxVsRandom, 1);
        let a = play_one(&cfg, 5).unwrap();
        let b = play_one(&cfg, 5).unwrap();
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.outcome, b.outcome);
    }
}
