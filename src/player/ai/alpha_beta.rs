//! Minimax search with alpha-beta pruning
//!
//! Scores are from Player1's perspective: Player1 maximizes, Player2
//! minimizes. Children are explored in increasing cell order and every
//! branch works on its own copy of the board, so the caller's board is
//! never touched and calls share no state.

use super::score::ScoreTable;
use crate::core::{Board, PlayerId};
use crate::error::{Error, Result};
use crate::logic::evaluate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Initial alpha ("minus infinity")
pub const NEG_INF: i32 = i32::MIN;
/// Initial beta ("plus infinity")
pub const POS_INF: i32 = i32::MAX;

/// Result of a top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMove {
    pub cell: usize,
    pub score: i32,
    /// Positions visited during this call
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    scores: ScoreTable,
    pruning: bool,
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher::new(ScoreTable::STANDARD, true)
    }
}

impl Searcher {
    pub fn new(scores: ScoreTable, pruning: bool) -> Self {
        Self { scores, pruning }
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Game-theoretic value of `board` with the given side to move, searched
    /// within the `(alpha, beta)` window.
    pub fn search(&self, board: &Board, alpha: i32, beta: i32, maximizing: bool) -> i32 {
        let mut nodes = 0;
        self.alpha_beta(board, alpha, beta, maximizing, &mut nodes)
    }

    /// Same value as `search` over the full window, without pruning.
    pub fn minimax(&self, board: &Board, maximizing: bool) -> i32 {
        let mut nodes = 0;
        self.plain(board, maximizing, &mut nodes)
    }

    /// Picks the move for `side`.
    ///
    /// Candidates are tried in increasing cell order and a later cell only
    /// replaces the current choice on a strictly better score, so ties go to
    /// the lowest index. Each candidate is searched with a fresh full window.
    pub fn best_move(&self, board: &Board, side: PlayerId) -> Result<BestMove> {
        if evaluate(board).is_terminal() {
            return Err(Error::NoMoveAvailable);
        }

        let reply_maximizing = side.opponent().is_maximizer();
        let mut nodes = 0;
        let mut best: Option<(usize, i32)> = None;

        for cell in board.empty_cells() {
            let child = board.with_mark(cell, side);
            let score = if self.pruning {
                self.alpha_beta(&child, NEG_INF, POS_INF, reply_maximizing, &mut nodes)
            } else {
                self.plain(&child, reply_maximizing, &mut nodes)
            };

            let improves = match best {
                None => true,
                Some((_, current)) if side.is_maximizer() => score > current,
                Some((_, current)) => score < current,
            };
            if improves {
                best = Some((cell, score));
            }
        }

        let (cell, score) = best.ok_or(Error::NoMoveAvailable)?;
        debug!(
            board = %board.to_compact_string(),
            ?side,
            cell,
            score,
            nodes,
            pruning = self.pruning,
            "best move selected"
        );
        Ok(BestMove { cell, score, nodes })
    }

    fn alpha_beta(
        &self,
        board: &Board,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if let Some(score) = self.scores.terminal_score(evaluate(board)) {
            return score;
        }

        if maximizing {
            let mut best = NEG_INF;
            for cell in board.empty_cells() {
                let child = board.with_mark(cell, PlayerId::Player1);
                best = best.max(self.alpha_beta(&child, alpha, beta, false, nodes));
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = POS_INF;
            for cell in board.empty_cells() {
                let child = board.with_mark(cell, PlayerId::Player2);
                best = best.min(self.alpha_beta(&child, alpha, beta, true, nodes));
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    fn plain(&self, board: &Board, maximizing: bool, nodes: &mut u64) -> i32 {
        *nodes += 1;
        if let Some(score) = self.scores.terminal_score(evaluate(board)) {
            return score;
        }

        let mover = if maximizing {
            PlayerId::Player1
        } else {
            PlayerId::Player2
        };
        let mut best = if maximizing { NEG_INF } else { POS_INF };
        for cell in board.empty_cells() {
            let child = board.with_mark(cell, mover);
            let score = self.plain(&child, !maximizing, nodes);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

/// `Searcher::search` with the standard score table.
pub fn search(board: &Board, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    Searcher::default().search(board, alpha, beta, maximizing)
}

/// `Searcher::best_move` with the standard score table and pruning enabled.
pub fn best_move(board: &Board, side: PlayerId) -> Result<BestMove> {
    Searcher::default().best_move(board, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{apply_move, Outcome};

    fn parse(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let board = parse("XX.......");
        let mv = best_move(&board, PlayerId::Player2).unwrap();
        assert_eq!(mv.cell, 2);
    }

    #[test]
    fn test_takes_win_over_block() {
        let board = parse("OO.XX....");
        let mv = best_move(&board, PlayerId::Player2).unwrap();
        assert_eq!(mv.cell, 2);
        assert_eq!(mv.score, -1000);

        let board = parse("XX.OO....");
        let mv = best_move(&board, PlayerId::Player1).unwrap();
        assert_eq!(mv.cell, 2);
        assert_eq!(mv.score, 1000);
    }

    #[test]
    fn test_terminal_board_scores() {
        assert_eq!(search(&parse("XXX.OO..."), NEG_INF, POS_INF, false), 1000);
        assert_eq!(search(&parse("OOOXX.X.."), NEG_INF, POS_INF, true), -1000);
        assert_eq!(search(&parse("XOXXOOOXX"), NEG_INF, POS_INF, true), 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let board = Board::new();
        assert_eq!(search(&board, NEG_INF, POS_INF, true), 0);
        let mv = best_move(&board, PlayerId::Player1).unwrap();
        assert_eq!(mv.score, 0);
        // every opening draws, so the first cell is kept
        assert_eq!(mv.cell, 0);
    }

    #[test]
    fn test_no_move_available() {
        assert!(matches!(
            best_move(&parse("XOXXOOOXX"), PlayerId::Player1),
            Err(Error::NoMoveAvailable)
        ));
        assert!(matches!(
            best_move(&parse("XXX.OO..."), PlayerId::Player2),
            Err(Error::NoMoveAvailable)
        ));
    }

    #[test]
    fn test_caller_board_is_not_mutated() {
        let board = parse("X...O....");
        let before = board;
        let _ = best_move(&board, PlayerId::Player1).unwrap();
        let _ = search(&board, NEG_INF, POS_INF, true);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let board = Board::new();
        let pruned = Searcher::new(ScoreTable::STANDARD, true)
            .best_move(&board, PlayerId::Player1)
            .unwrap();
        let plain = Searcher::new(ScoreTable::STANDARD, false)
            .best_move(&board, PlayerId::Player1)
            .unwrap();
        assert_eq!(pruned.cell, plain.cell);
        assert_eq!(pruned.score, plain.score);
        assert!(pruned.nodes < plain.nodes);
        // 549,946 positions in the full game tree, minus the root
        assert_eq!(plain.nodes, 549_945);
    }

    #[test]
    fn test_optimal_self_play_ends_in_tie() {
        let mut board = Board::new();
        let mut side = PlayerId::Player1;
        while !evaluate(&board).is_terminal() {
            let mv = best_move(&board, side).unwrap();
            board = apply_move(&board, mv.cell, side).unwrap();
            side = side.opponent();
        }
        assert_eq!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_custom_score_table_flows_through() {
        let scores = ScoreTable {
            player1_won: 10,
            player2_won: -7,
            tie: 1,
        };
        let searcher = Searcher::new(scores, true);
        let mv = searcher
            .best_move(&parse("OO.XX...."), PlayerId::Player2)
            .unwrap();
        assert_eq!((mv.cell, mv.score), (2, -7));
        assert_eq!(searcher.search(&Board::new(), NEG_INF, POS_INF, true), 1);
    }
}
