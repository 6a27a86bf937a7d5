use super::alpha_beta::Searcher;
use crate::core::{Board, PlayerId};
use crate::player::{Decision, PlayerController};
use tracing::warn;

/// Optimal opponent backed by the full-depth search.
pub struct MinimaxAI {
    pub player_id: PlayerId,
    pub name: String,
    searcher: Searcher,
}

impl MinimaxAI {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self::with_searcher(player_id, name, Searcher::default())
    }

    pub fn with_searcher(player_id: PlayerId, name: &str, searcher: Searcher) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            searcher,
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, legal_moves: &[usize]) -> Decision {
        if legal_moves.is_empty() {
            return Decision::Quit;
        }

        match self.searcher.best_move(board, self.player_id) {
            Ok(best) => Decision::Play(best.cell),
            Err(err) => {
                warn!(player = ?self.player_id, error = %err, "search found no move");
                Decision::Quit
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::legal_moves;

    #[test]
    fn test_chooses_legal_blocking_move() {
        let ai = MinimaxAI::new(PlayerId::Player2, "AI");
        let board: Board = "XX.......".parse().unwrap();
        let moves = legal_moves(&board);
        assert_eq!(ai.choose_move(&board, &moves), Decision::Play(2));
        assert!(!ai.is_human());
    }

    #[test]
    fn test_quits_when_nothing_to_play() {
        let ai = MinimaxAI::new(PlayerId::Player1, "AI");
        let full: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(ai.choose_move(&full, &[]), Decision::Quit);

        let decided: Board = "OOO.XX.X.".parse().unwrap();
        assert_eq!(
            ai.choose_move(&decided, &legal_moves(&decided)),
            Decision::Quit
        );
    }
}
