use crate::core::{Board, Cell, PlayerId};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The 8 winning lines: rows, columns, diagonals
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Game outcome, derived from a board on every query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Player1Won,
    Player2Won,
    Tie,
    InProgress,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Player1Won => Some(PlayerId::Player1),
            Outcome::Player2Won => Some(PlayerId::Player2),
            Outcome::Tie | Outcome::InProgress => None,
        }
    }

    fn won_by(player: PlayerId) -> Outcome {
        match player {
            PlayerId::Player1 => Outcome::Player1Won,
            PlayerId::Player2 => Outcome::Player2Won,
        }
    }
}

/// Classifies a board.
///
/// Player1 lines are checked before Player2 lines. A board on which both
/// players complete a line cannot come out of legal play and is not
/// rejected here; it reports `Player1Won`.
pub fn evaluate(board: &Board) -> Outcome {
    for player in [PlayerId::Player1, PlayerId::Player2] {
        if has_line(board, player) {
            return Outcome::won_by(player);
        }
    }
    if board.cells().iter().any(|cell| cell.is_empty()) {
        Outcome::InProgress
    } else {
        Outcome::Tie
    }
}

/// Three in a row for `player` on any line
pub fn has_line(board: &Board, player: PlayerId) -> bool {
    let target = Cell::from(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| board[index] == target))
}

/// First completed line, in the same priority order as `evaluate`.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    [PlayerId::Player1, PlayerId::Player2]
        .into_iter()
        .find_map(|player| {
            let target = Cell::from(player);
            LINES
                .iter()
                .find(|line| line.iter().all(|&index| board[index] == target))
                .copied()
        })
}

/// Empty cells in increasing index order
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board.empty_cells().collect()
}

/// Returns a new board with `player`'s mark on `cell`; the input is left untouched.
pub fn apply_move(board: &Board, cell: usize, player: PlayerId) -> Result<Board> {
    if evaluate(board).is_terminal() {
        return Err(Error::NoMoveAvailable);
    }
    let mut next = *board;
    next.place(cell, player)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, PlayerId)]) -> Board {
        let mut board = Board::new();
        for &(index, player) in cells {
            board.place(index, player).unwrap();
        }
        board
    }

    #[test]
    fn test_every_line_wins_for_either_player() {
        for line in LINES {
            let x = board_with(&line.map(|i| (i, PlayerId::Player1)));
            assert_eq!(evaluate(&x), Outcome::Player1Won, "line {:?}", line);
            assert_eq!(winning_line(&x), Some(line));

            let o = board_with(&line.map(|i| (i, PlayerId::Player2)));
            assert_eq!(evaluate(&o), Outcome::Player2Won, "line {:?}", line);
        }
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Player1Won);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        for text in ["XOXXOOOXX", "XXOOOXXOX", "OXOXXOXOX"] {
            let board: Board = text.parse().unwrap();
            assert_eq!(evaluate(&board), Outcome::Tie, "{}", text);
            assert_eq!(winning_line(&board), None);
        }
    }

    #[test]
    fn test_open_board_without_line_is_in_progress() {
        for text in [".........", "X........", "XO.......", "XOXXOO.X."] {
            let board: Board = text.parse().unwrap();
            assert_eq!(evaluate(&board), Outcome::InProgress, "{}", text);
        }
    }

    #[test]
    fn test_both_lines_reports_player1() {
        let board: Board = "XXXOOO...".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Player1Won);
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board: Board = "X...O....".parse().unwrap();
        let next = apply_move(&board, 8, PlayerId::Player1).unwrap();
        assert_eq!(board.to_compact_string(), "X...O....");
        assert_eq!(next.to_compact_string(), "X...O...X");
        assert_eq!(legal_moves(&next), vec![1, 2, 3, 5, 6, 7]);

        assert!(matches!(
            apply_move(&board, 4, PlayerId::Player1),
            Err(Error::CellOccupied { cell: 4 })
        ));

        let won: Board = "XXX.OO...".parse().unwrap();
        assert!(matches!(
            apply_move(&won, 3, PlayerId::Player2),
            Err(Error::NoMoveAvailable)
        ));
    }
}
