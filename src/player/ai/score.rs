//! Terminal score policy
//!
//! Every score the search assigns to a finished game comes from one
//! `ScoreTable`. Scores are from Player1's perspective: positive favours
//! Player1, negative favours Player2.

use crate::error::{Error, Result};
use crate::logic::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub player1_won: i32,
    pub player2_won: i32,
    pub tie: i32,
}

impl ScoreTable {
    pub const STANDARD: ScoreTable = ScoreTable {
        player1_won: 1000,
        player2_won: -1000,
        tie: 0,
    };

    /// Score of a finished game, `None` while the game is still running.
    pub fn terminal_score(&self, outcome: Outcome) -> Option<i32> {
        match outcome {
            Outcome::Player1Won => Some(self.player1_won),
            Outcome::Player2Won => Some(self.player2_won),
            Outcome::Tie => Some(self.tie),
            Outcome::InProgress => None,
        }
    }

    /// Requires `player1_won > tie > player2_won`, all strictly inside the
    /// search window sentinels.
    pub fn validate(&self) -> Result<()> {
        if !(self.player1_won > self.tie && self.tie > self.player2_won) {
            return Err(Error::Config {
                message: format!(
                    "scores must satisfy player1_won > tie > player2_won (got {} / {} / {})",
                    self.player1_won, self.tie, self.player2_won
                ),
            });
        }
        if self.player1_won == i32::MAX || self.player2_won == i32::MIN {
            return Err(Error::Config {
                message: "terminal scores must lie strictly inside the i32 range".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        ScoreTable::STANDARD
    }
}
